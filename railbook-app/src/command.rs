use railbook_core::{PassengerField, PaymentField, Tab};

/// One line of user input on the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Landing page call to action
    Start,
    Tab(Tab),
    From(String),
    To(String),
    Search,
    ShowAll,
    Retry,
    Book(String),
    Set(FormField, String),
    /// Submit the form of the current wizard step
    Next,
    Back,
    /// Close control, backdrop, or "Done" on the confirmation
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Passenger(PassengerField),
    Payment(PaymentField),
}

impl FormField {
    fn parse(name: &str) -> Option<Self> {
        let field = match name {
            "name" => FormField::Passenger(PassengerField::Name),
            "email" => FormField::Passenger(PassengerField::Email),
            "phone" => FormField::Passenger(PassengerField::Phone),
            "age" => FormField::Passenger(PassengerField::Age),
            "gender" => FormField::Passenger(PassengerField::Gender),
            "card" => FormField::Payment(PaymentField::CardNumber),
            "expiry" => FormField::Payment(PaymentField::Expiry),
            "cvv" => FormField::Payment(PaymentField::Cvv),
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown field '{0}'. Fields: name, email, phone, age, gender, card, expiry, cvv")]
    UnknownField(String),
}

pub const HELP: &str = "\
Commands:
  start                 open the booking page
  trains | stations     switch tab
  from <code>           set the origin station
  to <code>             set the destination station
  search                search trains between origin and destination
  all                   show all trains
  retry                 repeat the request that failed
  book <train number>   start booking a train
  set <field> <value>   fill a form field (name, email, phone, age, gender, card, expiry, cvv)
  next                  submit the current step
  back                  return from payment to passenger details
  close | done          close the booking
  quit                  exit";

/// Parse a line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "start" => Command::Start,
        "trains" => Command::Tab(Tab::Trains),
        "stations" => Command::Tab(Tab::Stations),
        "from" => Command::From(rest.to_uppercase()),
        "to" => Command::To(rest.to_uppercase()),
        "search" => Command::Search,
        "all" => Command::ShowAll,
        "retry" => Command::Retry,
        "book" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("book <train number>"));
            }
            Command::Book(rest.to_string())
        }
        "set" => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if name.is_empty() {
                return Err(CommandError::Usage("set <field> <value>"));
            }
            let field = FormField::parse(&name.to_ascii_lowercase())
                .ok_or_else(|| CommandError::UnknownField(name.to_string()))?;
            Command::Set(field, value.trim().to_string())
        }
        "next" | "continue" | "pay" => Command::Next,
        "back" => Command::Back,
        "close" | "done" => Command::Close,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_station_codes_are_uppercased() {
        assert_eq!(parse("from ndls"), Ok(Some(Command::From("NDLS".to_string()))));
        assert_eq!(parse("TO hwh "), Ok(Some(Command::To("HWH".to_string()))));
        // Clearing a field
        assert_eq!(parse("to"), Ok(Some(Command::To(String::new()))));
    }

    #[test]
    fn test_set_keeps_value_spaces() {
        assert_eq!(
            parse("set name Anil  Kumar"),
            Ok(Some(Command::Set(
                FormField::Passenger(PassengerField::Name),
                "Anil  Kumar".to_string()
            )))
        );
        assert_eq!(
            parse("set card 4111 1111"),
            Ok(Some(Command::Set(FormField::Payment(PaymentField::CardNumber), "4111 1111".to_string())))
        );
        assert_eq!(
            parse("set email"),
            Ok(Some(Command::Set(FormField::Passenger(PassengerField::Email), String::new())))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("fly"), Err(CommandError::Unknown("fly".to_string())));
        assert_eq!(parse("book"), Err(CommandError::Usage("book <train number>")));
        assert_eq!(parse("set"), Err(CommandError::Usage("set <field> <value>")));
        assert_eq!(parse("set seat 12"), Err(CommandError::UnknownField("seat".to_string())));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("done"), Ok(Some(Command::Close)));
        assert_eq!(parse("pay"), Ok(Some(Command::Next)));
        assert_eq!(parse("stations"), Ok(Some(Command::Tab(Tab::Stations))));
        assert_eq!(parse("book 12951"), Ok(Some(Command::Book("12951".to_string()))));
    }
}
