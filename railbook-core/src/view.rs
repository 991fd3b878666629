use railbook_shared::{Station, Train};
use std::fmt;

use crate::repository::FetchError;
use crate::stations::station_name;
use crate::wizard::BookingWizard;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Surface {
    #[default]
    Landing,
    Booking,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Trains,
    Stations,
}

/// Which list a reference data request writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Trains,
    Stations,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListKind::Trains => f.write_str("trains"),
            ListKind::Stations => f.write_str("stations"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceRequest {
    AllTrains,
    Search { from: String, to: String },
    Stations,
}

impl ReferenceRequest {
    pub fn list(&self) -> ListKind {
        match self {
            ReferenceRequest::AllTrains | ReferenceRequest::Search { .. } => ListKind::Trains,
            ReferenceRequest::Stations => ListKind::Stations,
        }
    }
}

/// Handed out when a request is issued; the result is applied only if the
/// ticket is still the latest one for its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub request: ReferenceRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketOutcome {
    Applied,
    Failed,
    /// A newer request for the same list was issued in the meantime.
    Stale,
}

/// User-facing banner for a failed load, with the request to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub retry: ReferenceRequest,
}

/// State of the booking front-end.
///
/// A plain value: rendering reads it, and it changes only through the
/// methods below. Fetching happens elsewhere; the fetcher asks for a ticket,
/// performs the request and hands the result back with that ticket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingView {
    pub surface: Surface,
    pub tab: Tab,
    pub from: String,
    pub to: String,
    pub trains: Vec<Train>,
    pub stations: Vec<Station>,
    pub loading: bool,
    /// One banner per list; a station failure never hides a train failure.
    pub train_notice: Option<Notice>,
    pub station_notice: Option<Notice>,
    pub wizard: BookingWizard,
    next_seq: u64,
    latest_trains: Option<u64>,
    latest_stations: Option<u64>,
}

impl BookingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The landing page's call to action
    pub fn start_booking(&mut self) {
        self.surface = Surface::Booking;
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn set_from(&mut self, code: &str) {
        self.from = code.trim().to_string();
    }

    pub fn set_to(&mut self, code: &str) {
        self.to = code.trim().to_string();
    }

    pub fn can_search(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty()
    }

    /// Register a new request. Train requests raise the loading flag.
    pub fn issue(&mut self, request: ReferenceRequest) -> RequestTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        match request.list() {
            ListKind::Trains => {
                self.latest_trains = Some(seq);
                self.loading = true;
            }
            ListKind::Stations => self.latest_stations = Some(seq),
        }
        RequestTicket { seq, request }
    }

    /// Ticket for a search with the current from/to, or `None` when either is empty.
    pub fn issue_search(&mut self) -> Option<RequestTicket> {
        if !self.can_search() {
            return None;
        }
        let request = ReferenceRequest::Search {
            from: self.from.clone(),
            to: self.to.clone(),
        };
        Some(self.issue(request))
    }

    pub fn is_latest(&self, ticket: &RequestTicket) -> bool {
        let latest = match ticket.request.list() {
            ListKind::Trains => self.latest_trains,
            ListKind::Stations => self.latest_stations,
        };
        latest == Some(ticket.seq)
    }

    pub fn complete_trains(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Vec<Train>, FetchError>,
    ) -> TicketOutcome {
        if !self.is_latest(ticket) {
            tracing::debug!(seq = ticket.seq, "Discarding stale train response");
            return TicketOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(trains) => {
                self.trains = trains;
                self.clear_notice(ListKind::Trains);
                TicketOutcome::Applied
            }
            Err(e) => {
                self.record_failure(ticket, &e);
                TicketOutcome::Failed
            }
        }
    }

    pub fn complete_stations(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Vec<Station>, FetchError>,
    ) -> TicketOutcome {
        if !self.is_latest(ticket) {
            tracing::debug!(seq = ticket.seq, "Discarding stale station response");
            return TicketOutcome::Stale;
        }

        match result {
            Ok(stations) => {
                self.stations = stations;
                self.clear_notice(ListKind::Stations);
                TicketOutcome::Applied
            }
            Err(e) => {
                self.record_failure(ticket, &e);
                TicketOutcome::Failed
            }
        }
    }

    fn record_failure(&mut self, ticket: &RequestTicket, error: &FetchError) {
        let list = ticket.request.list();
        tracing::error!(seq = ticket.seq, %list, "Failed to fetch {}: {}", list, error);
        *self.notice_slot(list) = Some(Notice {
            message: format!("Could not load {}: {}", list, error),
            retry: ticket.request.clone(),
        });
    }

    fn clear_notice(&mut self, list: ListKind) {
        *self.notice_slot(list) = None;
    }

    fn notice_slot(&mut self, list: ListKind) -> &mut Option<Notice> {
        match list {
            ListKind::Trains => &mut self.train_notice,
            ListKind::Stations => &mut self.station_notice,
        }
    }

    pub fn notice(&self, list: ListKind) -> Option<&Notice> {
        match list {
            ListKind::Trains => self.train_notice.as_ref(),
            ListKind::Stations => self.station_notice.as_ref(),
        }
    }

    /// Banners currently shown, trains first.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.train_notice.iter().chain(self.station_notice.iter())
    }

    pub fn has_notice(&self) -> bool {
        self.notices().next().is_some()
    }

    /// Tickets re-issuing every request behind a banner. Empty when nothing failed.
    pub fn issue_retries(&mut self) -> Vec<RequestTicket> {
        let requests: Vec<ReferenceRequest> = self.notices().map(|n| n.retry.clone()).collect();
        requests.into_iter().map(|request| self.issue(request)).collect()
    }

    /// The train list to render, or `None` while a train request is in flight.
    pub fn visible_trains(&self) -> Option<&[Train]> {
        if self.loading {
            None
        } else {
            Some(&self.trains)
        }
    }

    pub fn visible_stations(&self) -> Option<&[Station]> {
        if self.loading {
            None
        } else {
            Some(&self.stations)
        }
    }

    pub fn station_name<'a>(&'a self, code: &'a str) -> &'a str {
        station_name(code, &self.stations)
    }

    /// "Book now" on a listed train
    pub fn book(&mut self, train_number: &str) -> CoreResult<()> {
        let train = self
            .trains
            .iter()
            .find(|t| t.number == train_number)
            .cloned()
            .ok_or_else(|| CoreError::UnknownTrain(train_number.to_string()))?;
        self.wizard.open(train)?;
        Ok(())
    }

    /// Close control or backdrop click
    pub fn close_booking(&mut self) {
        self.wizard.close();
    }
}
