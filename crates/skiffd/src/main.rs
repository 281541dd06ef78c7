//! skiffd — the skiff scheduler daemon.
//!
//! Parses the fleet flags, connects a session to the coordinator,
//! drives the scheduler state machine on a background task, and blocks
//! the main path on the readiness gate. Ctrl-C stops the session and
//! runs a best-effort shutdown notification.
//!
//! # Usage
//!
//! ```text
//! skiffd --master coordinator.internal --replicas 3 \
//!        --dist-node namenode:8020 [--dns 10.0.0.2] [--docker]
//! ```

mod session;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use skiff_scheduler::config::FRAMEWORK_NAME;
use skiff_scheduler::{
    Config, DnsResolver, Driver, LaunchMode, SchedulerStateMachine, SystemClock,
};

use crate::session::{FrameworkSpec, Session};

#[derive(Parser)]
#[command(name = "skiffd", about = "Skiff cluster scheduler")]
struct Cli {
    /// Coordinator master hostname.
    #[arg(long)]
    master: String,

    /// Number of worker hosts to place a replica on.
    #[arg(long)]
    replicas: usize,

    /// host:port of the node serving binary bundles.
    #[arg(long)]
    dist_node: String,

    /// DNS server injected into containers.
    #[arg(long)]
    dns: Option<String>,

    /// Launch replicas as containers instead of agent-fetched
    /// binaries.
    #[arg(long)]
    docker: bool,

    /// Coordinator control-plane port.
    #[arg(long, default_value = "5050")]
    control_port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skiffd=debug,skiff=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let config = Config {
        master_host: cli.master,
        target_replicas: cli.replicas,
        distribution_node: cli.dist_node,
        dns_host: cli.dns,
        launch_mode: if cli.docker {
            LaunchMode::Containerized
        } else {
            LaunchMode::AgentDelivered
        },
        control_port: cli.control_port,
        ..Config::default()
    };

    info!(
        master = %config.master_host,
        replicas = config.target_replicas,
        docker = cli.docker,
        dns = ?config.dns_host,
        "starting skiff scheduler"
    );

    let addr = format!("{}:{}", config.master_host, config.control_port);
    let (session, mut events) = Session::connect(
        &addr,
        FrameworkSpec {
            name: FRAMEWORK_NAME.to_string(),
            user: FRAMEWORK_NAME.to_string(),
            checkpoint: true,
        },
    )
    .await?;
    let driver: Arc<dyn Driver> = Arc::new(session);

    let mut machine = SchedulerStateMachine::new(
        config,
        driver.clone(),
        Arc::new(DnsResolver),
        Arc::new(SystemClock),
    );
    let gate = machine.gate();

    // One event at a time; the state machine is not shared.
    let event_loop = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            machine.handle(event);
        }
        info!("event stream ended");
    });

    // Block on the readiness gate, then stay up servicing events
    // until a shutdown signal.
    tokio::select! {
        _ = gate.wait() => {
            info!("cluster initialized");
            tokio::signal::ctrl_c().await?;
        }
        result = tokio::signal::ctrl_c() => result?,
    }

    info!("shutdown signal received — stopping session");
    driver.stop();
    event_loop.abort();

    info!("skiff scheduler stopped");
    Ok(())
}
