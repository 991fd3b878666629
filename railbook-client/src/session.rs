use railbook_core::{
    BookingView, PnrGenerator, ReferenceDataSource, ReferenceRequest, RequestTicket, TicketOutcome,
    WizardError,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the booking front-end's state and performs its reference data reads.
///
/// The view lock is never held across a fetch. Each request takes a ticket
/// before it goes out, and its result is applied only if no newer request
/// for the same list was issued meanwhile (last issued wins, regardless of
/// which response arrives first).
pub struct BookingSession {
    source: Arc<dyn ReferenceDataSource>,
    generator: Box<dyn PnrGenerator>,
    view: RwLock<BookingView>,
}

impl BookingSession {
    pub fn new(source: Arc<dyn ReferenceDataSource>, generator: Box<dyn PnrGenerator>) -> Self {
        Self {
            source,
            generator,
            view: RwLock::new(BookingView::new()),
        }
    }

    /// Copy of the current state, for rendering.
    pub async fn snapshot(&self) -> BookingView {
        self.view.read().await.clone()
    }

    /// Apply a local transition (tab switch, form edit, close, ...).
    pub async fn update<R>(&self, f: impl FnOnce(&mut BookingView) -> R) -> R {
        let mut view = self.view.write().await;
        f(&mut view)
    }

    /// Initial load when the booking surface appears
    pub async fn mount(&self) {
        tokio::join!(self.load_trains(), self.load_stations());
    }

    pub async fn load_trains(&self) -> TicketOutcome {
        let ticket = self.view.write().await.issue(ReferenceRequest::AllTrains);
        self.run(ticket).await
    }

    pub async fn load_stations(&self) -> TicketOutcome {
        let ticket = self.view.write().await.issue(ReferenceRequest::Stations);
        self.run(ticket).await
    }

    /// Search with the current from/to. `None` (and no request) when either is empty.
    pub async fn search_trains(&self) -> Option<TicketOutcome> {
        let ticket = self.view.write().await.issue_search()?;
        Some(self.run(ticket).await)
    }

    /// Re-issue every request behind an error banner. Empty when nothing failed.
    pub async fn retry(&self) -> Vec<TicketOutcome> {
        let tickets = self.view.write().await.issue_retries();
        let mut outcomes = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            outcomes.push(self.run(ticket).await);
        }
        outcomes
    }

    /// Payment → Confirmed using this session's reference code generator.
    pub async fn submit_payment(&self) -> Result<(), WizardError> {
        let mut view = self.view.write().await;
        view.wizard.submit_payment(self.generator.as_ref())
    }

    async fn run(&self, ticket: RequestTicket) -> TicketOutcome {
        tracing::debug!(seq = ticket.seq, request = ?ticket.request, "Issuing reference data request");

        match &ticket.request {
            ReferenceRequest::AllTrains => {
                let result = self.source.fetch_trains().await;
                self.view.write().await.complete_trains(&ticket, result)
            }
            ReferenceRequest::Search { from, to } => {
                let result = self.source.search_trains(from, to).await;
                self.view.write().await.complete_trains(&ticket, result)
            }
            ReferenceRequest::Stations => {
                let result = self.source.fetch_stations().await;
                self.view.write().await.complete_stations(&ticket, result)
            }
        }
    }
}
