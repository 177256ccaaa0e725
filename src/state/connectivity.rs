// Connectivity flag mirrored from the browser's online/offline events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionState {
    pub online: bool,
}

impl ConnectionState {
    /// Indicator label; the host app is Japanese-localized.
    pub fn status_text(self) -> &'static str {
        if self.online { "オンライン" } else { "オフライン" }
    }

    /// Bootstrap text class for the indicator.
    pub fn status_class(self) -> &'static str {
        if self.online { "text-success" } else { "text-warning" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn online_indicator() {
        let s = ConnectionState { online: true };
        assert_eq!(s.status_text(), "オンライン");
        assert_eq!(s.status_class(), "text-success");
    }

    #[test]
    fn offline_indicator() {
        let s = ConnectionState { online: false };
        assert_eq!(s.status_text(), "オフライン");
        assert_eq!(s.status_class(), "text-warning");
    }
}
