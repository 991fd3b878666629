use std::fmt;

/// Wraps sensitive form input (card number, CVV) so it never leaks through
/// `Debug` or `Display`, e.g. in `tracing::debug!("{:?}", payment)`.
/// Not serializable: card data stays in process.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl Masked<String> {
    /// Last four characters, for display such as "**** 4242".
    pub fn last4(&self) -> &str {
        let len = self.0.chars().count();
        match self.0.char_indices().nth(len.saturating_sub(4)) {
            Some((idx, _)) => &self.0[idx..],
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_value_in_logs() {
        let card = Masked("4111111111111111".to_string());
        assert_eq!(format!("{:?}", card), "********");
        assert_eq!(format!("{}", card), "********");
        assert_eq!(card.expose(), "4111111111111111");
        assert_eq!(card.last4(), "1111");
    }

    #[test]
    fn test_last4_short_values() {
        assert_eq!(Masked("42".to_string()).last4(), "42");
        assert_eq!(Masked(String::new()).last4(), "");
    }
}
