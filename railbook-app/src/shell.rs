use railbook_client::BookingSession;
use railbook_core::{BookingStep, CoreError, Surface, TicketOutcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::command::{self, Command, FormField, HELP};
use crate::render;

/// Drives a [`BookingSession`] from line-oriented input, re-rendering the
/// current surface after every command.
pub struct Shell {
    session: BookingSession,
}

/// What the shell should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(Option<String>),
    Exit,
}

impl Shell {
    pub fn new(session: BookingSession) -> Self {
        Self { session }
    }

    pub async fn run<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(render::render(&self.session.snapshot().await).as_bytes())
            .await?;

        let mut lines = input.lines();
        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let message = match command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(cmd)) => match self.execute(cmd).await {
                    Flow::Exit => break,
                    Flow::Continue(message) => message,
                },
                Err(e) => Some(e.to_string()),
            };

            if let Some(message) = message {
                output.write_all(format!("{}\n\n", message).as_bytes()).await?;
            }
            let screen = render::render(&self.session.snapshot().await);
            output.write_all(screen.as_bytes()).await?;
        }

        output.flush().await
    }

    /// Apply one command. Rejected commands come back as a message for the user.
    pub async fn execute(&self, command: Command) -> Flow {
        let result = self.apply(command).await;
        match result {
            Ok(flow) => flow,
            Err(e) => Flow::Continue(Some(format!("! {}", e))),
        }
    }

    async fn apply(&self, command: Command) -> Result<Flow, CoreError> {
        let session = &self.session;
        let on_landing = session.snapshot().await.surface == Surface::Landing;
        let message = match command {
            Command::Help => Some(HELP.to_string()),
            Command::Quit => return Ok(Flow::Exit),
            Command::Start => {
                if on_landing {
                    session.update(|v| v.start_booking()).await;
                    session.mount().await;
                }
                None
            }
            command if on_landing => {
                tracing::debug!(?command, "Ignoring command on landing page");
                Some("Type `start` to open the booking page.".to_string())
            }
            Command::Tab(tab) => {
                session.update(|v| v.select_tab(tab)).await;
                None
            }
            Command::From(code) => {
                session.update(|v| v.set_from(&code)).await;
                None
            }
            Command::To(code) => {
                session.update(|v| v.set_to(&code)).await;
                None
            }
            Command::Search => match session.search_trains().await {
                None => Some("Choose both a From and a To station first.".to_string()),
                Some(outcome) => outcome_message(outcome),
            },
            Command::ShowAll => outcome_message(session.load_trains().await),
            Command::Retry => {
                let outcomes = session.retry().await;
                if outcomes.is_empty() {
                    Some("Nothing to retry.".to_string())
                } else {
                    outcomes.into_iter().find_map(outcome_message)
                }
            }
            Command::Book(number) => {
                session.update(|v| v.book(&number)).await?;
                None
            }
            Command::Set(FormField::Passenger(field), value) => {
                session.update(|v| v.wizard.edit_passenger(field, &value)).await?;
                None
            }
            Command::Set(FormField::Payment(field), value) => {
                session.update(|v| v.wizard.edit_payment(field, &value)).await?;
                None
            }
            Command::Next => {
                let step = session.snapshot().await.wizard.step();
                match step {
                    BookingStep::Payment => session.submit_payment().await?,
                    _ => session.update(|v| v.wizard.submit_passenger()).await?,
                }
                None
            }
            Command::Back => {
                session.update(|v| v.wizard.back()).await?;
                None
            }
            Command::Close => {
                session.update(|v| v.close_booking()).await;
                None
            }
        };
        Ok(Flow::Continue(message))
    }
}

fn outcome_message(outcome: TicketOutcome) -> Option<String> {
    match outcome {
        TicketOutcome::Applied | TicketOutcome::Stale => None,
        // The banner on the page carries the details
        TicketOutcome::Failed => Some("! Request failed.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use railbook_core::{
        FetchError, FixedPnrGenerator, ListKind, PassengerField, ReferenceDataSource, Tab,
    };
    use railbook_shared::{Station, Train};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct StaticSource {
        fail_trains: AtomicBool,
    }

    fn train(number: &str, source: &str, destination: &str) -> Train {
        Train {
            number: number.to_string(),
            name: format!("Express {}", number),
            train_type: "Express".to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            departure_time: "07:15".to_string(),
            arrival_time: "19:05".to_string(),
            seats_available: 12,
            fare: 845.0,
            running_days: vec!["Sun".to_string()],
        }
    }

    #[async_trait]
    impl ReferenceDataSource for StaticSource {
        async fn fetch_trains(&self) -> Result<Vec<Train>, FetchError> {
            if self.fail_trains.load(Ordering::SeqCst) {
                return Err(FetchError::Transport("connection refused".to_string()));
            }
            Ok(vec![train("11077", "CSMT", "NDLS"), train("12002", "NDLS", "BPL")])
        }

        async fn fetch_stations(&self) -> Result<Vec<Station>, FetchError> {
            Ok(vec![
                Station::new("NDLS", "New Delhi", "New Delhi", "Delhi"),
                Station::new("BPL", "Bhopal Junction", "Bhopal", "Madhya Pradesh"),
            ])
        }

        async fn search_trains(&self, from: &str, to: &str) -> Result<Vec<Train>, FetchError> {
            let all = self.fetch_trains().await?;
            Ok(all.into_iter().filter(|t| t.serves(from, to)).collect())
        }
    }

    fn shell(fail_trains: bool) -> (Shell, Arc<StaticSource>) {
        let source = Arc::new(StaticSource {
            fail_trains: AtomicBool::new(fail_trains),
        });
        let dyn_source: Arc<dyn ReferenceDataSource> = source.clone();
        let session = BookingSession::new(dyn_source, Box::new(FixedPnrGenerator::new("PNR7K3DW2QP")));
        (Shell::new(session), source)
    }

    #[tokio::test]
    async fn test_landing_requires_start() {
        let (shell, _) = shell(false);
        let flow = shell.execute(Command::Tab(Tab::Stations)).await;
        assert_eq!(flow, Flow::Continue(Some("Type `start` to open the booking page.".to_string())));

        shell.execute(Command::Start).await;
        let view = shell.session.snapshot().await;
        assert_eq!(view.surface, Surface::Booking);
        assert_eq!(view.trains.len(), 2);
        assert_eq!(view.stations.len(), 2);
    }

    #[tokio::test]
    async fn test_search_needs_both_codes() {
        let (shell, _) = shell(false);
        shell.execute(Command::Start).await;
        shell.execute(Command::From("NDLS".to_string())).await;
        let flow = shell.execute(Command::Search).await;
        assert_eq!(flow, Flow::Continue(Some("Choose both a From and a To station first.".to_string())));

        shell.execute(Command::To("BPL".to_string())).await;
        shell.execute(Command::Search).await;
        let view = shell.session.snapshot().await;
        assert_eq!(view.trains.len(), 1);
        assert_eq!(view.trains[0].number, "12002");
    }

    #[tokio::test]
    async fn test_failure_then_retry() {
        let (shell, source) = shell(true);
        shell.execute(Command::Start).await;
        let view = shell.session.snapshot().await;
        assert!(view.notice(ListKind::Trains).is_some());
        assert_eq!(view.stations.len(), 2);

        source.fail_trains.store(false, Ordering::SeqCst);
        assert_eq!(shell.execute(Command::Retry).await, Flow::Continue(None));
        let view = shell.session.snapshot().await;
        assert!(!view.has_notice());
        assert_eq!(view.trains.len(), 2);
    }

    #[tokio::test]
    async fn test_wizard_errors_are_reported() {
        let (shell, _) = shell(false);
        shell.execute(Command::Start).await;

        let flow = shell.execute(Command::Book("00000".to_string())).await;
        assert_eq!(flow, Flow::Continue(Some("! Train not found: 00000".to_string())));

        shell.execute(Command::Book("12002".to_string())).await;
        let flow = shell.execute(Command::Next).await;
        assert_eq!(
            flow,
            Flow::Continue(Some("! Missing required fields: name, email, phone, age".to_string()))
        );
        let flow = shell
            .execute(Command::Set(FormField::Passenger(PassengerField::Age), "abc".to_string()))
            .await;
        assert!(matches!(flow, Flow::Continue(Some(msg)) if msg.starts_with("! Invalid age")));
    }

    #[tokio::test]
    async fn test_scripted_session() {
        let (shell, _) = shell(false);
        let script = "\
start
from ndls
to bpl
search
book 12002
set name Priya Nair
set email priya@example.com
set phone 9811111111
set age 27
set gender female
next
set card 4111111111111111
set expiry 08/30
set cvv 456
pay
quit
";
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).await.unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Type `start` to book your journey."));
        assert!(output.contains("Express 12002  #12002  [express]"));
        assert!(output.contains("New Delhi → Bhopal Junction"));
        assert!(output.contains("PNR: PNR7K3DW2QP"));
        assert!(output.contains("Passenger: Priya Nair"));
        assert!(!output.contains("4111111111111111"));

        let view = shell.session.snapshot().await;
        assert_eq!(view.wizard.step(), BookingStep::Confirmed);
    }
}
