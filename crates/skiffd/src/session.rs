//! Coordinator session — the driver/event transport.
//!
//! Newline-delimited JSON over TCP: the coordinator streams [`Event`]s
//! inbound, the scheduler's outbound calls are written as tagged
//! [`OutboundCall`] messages. A reader task feeds the event channel;
//! a writer task drains the call queue, so `Driver` methods never
//! block the event-processing path on the socket.

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use skiff_model::{OfferId, Resource, TaskSpec};
use skiff_scheduler::{Driver, Event};

/// Framework identity advertised in the subscribe call.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkSpec {
    pub name: String,
    pub user: String,
    pub checkpoint: bool,
}

/// Outbound wire messages.
#[derive(Debug, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
enum OutboundCall {
    Subscribe { framework: FrameworkSpec },
    RequestResources { resources: Vec<Resource> },
    DeclineOffer { offer_id: OfferId },
    LaunchTasks {
        offer_ids: Vec<OfferId>,
        tasks: Vec<TaskSpec>,
    },
    Stop,
}

/// A live session with the coordinator, usable as the scheduler's
/// [`Driver`].
pub struct Session {
    calls: mpsc::UnboundedSender<OutboundCall>,
}

impl Session {
    /// Connect, subscribe, and spawn the reader/writer tasks.
    ///
    /// Returns the session and the inbound event stream the state
    /// machine drains.
    pub async fn connect(
        addr: &str,
        framework: FrameworkSpec,
    ) -> anyhow::Result<(Session, mpsc::Receiver<Event>)> {
        let stream = TcpStream::connect(addr).await?;
        info!(%addr, "connected to coordinator");

        let (read_half, mut write_half) = stream.into_split();
        let (event_tx, event_rx) = mpsc::channel(64);
        let (call_tx, mut call_rx) = mpsc::unbounded_channel::<OutboundCall>();

        tokio::spawn(async move {
            let mut lines = BufReader::new(read_half).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => match serde_json::from_str::<Event>(&line) {
                        Ok(event) => {
                            debug!(?event, "event received");
                            if event_tx.send(event).await.is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            warn!(error = %err, "dropping unparseable event");
                        }
                    },
                    Ok(None) => {
                        info!("coordinator closed the event stream");
                        break;
                    }
                    Err(err) => {
                        warn!(error = %err, "event stream read failed");
                        break;
                    }
                }
            }
        });

        tokio::spawn(async move {
            while let Some(call) = call_rx.recv().await {
                let stop = matches!(call, OutboundCall::Stop);
                match serde_json::to_string(&call) {
                    Ok(mut line) => {
                        line.push('\n');
                        if let Err(err) =
                            write_half.write_all(line.as_bytes()).await
                        {
                            warn!(error = %err, "outbound call write failed");
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "outbound call serialization failed");
                    }
                }
                if stop {
                    let _ = write_half.shutdown().await;
                    break;
                }
            }
        });

        let session = Session { calls: call_tx };
        session.send(OutboundCall::Subscribe { framework });

        Ok((session, event_rx))
    }

    fn send(&self, call: OutboundCall) {
        if self.calls.send(call).is_err() {
            warn!("session closed — outbound call dropped");
        }
    }
}

impl Driver for Session {
    fn request_resources(&self, resources: Vec<Resource>) {
        self.send(OutboundCall::RequestResources { resources });
    }

    fn decline_offer(&self, offer_id: &OfferId) {
        self.send(OutboundCall::DeclineOffer {
            offer_id: offer_id.clone(),
        });
    }

    fn launch_tasks(&self, offer_ids: &[OfferId], tasks: Vec<TaskSpec>) {
        self.send(OutboundCall::LaunchTasks {
            offer_ids: offer_ids.to_vec(),
            tasks,
        });
    }

    fn stop(&self) {
        self.send(OutboundCall::Stop);
    }
}
