use log::info;

/// Outbound notifications for the overlay layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Reveal the overlay content for the named target
    ShowContent(String),
    HideAllContent,
    ShowPrompt,
    HidePrompt,
    /// Escape menu opened after pointer lock was lost
    ShowMenu,
    /// Host should grab (`true`) or release (`false`) the cursor
    PointerLock(bool),
    ShowStationDisplay(String),
    HideStationDisplay(String),
    ControlsHint(bool),
    EscapeHint(bool),
}

/// Receiver for controller notifications
pub trait UiSink {
    fn notify(&mut self, event: UiEvent);
}

impl UiSink for Vec<UiEvent> {
    fn notify(&mut self, event: UiEvent) {
        self.push(event);
    }
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl UiSink for LogSink {
    fn notify(&mut self, event: UiEvent) {
        info!("ui: {:?}", event);
    }
}

/// Visibility flag that reports only changes
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Toggle {
    visible: bool,
}

impl Toggle {
    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true when the visibility changed
    pub(crate) fn set(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<UiEvent> = Vec::new();
        sink.notify(UiEvent::ShowPrompt);
        sink.notify(UiEvent::ShowContent("jbox".to_string()));
        assert_eq!(sink, vec![UiEvent::ShowPrompt, UiEvent::ShowContent("jbox".to_string())]);
    }

    #[test]
    fn toggle_reports_changes_only() {
        let mut toggle = Toggle::default();
        assert!(!toggle.set(false));
        assert!(toggle.set(true));
        assert!(!toggle.set(true));
        assert!(toggle.is_visible());
        assert!(toggle.set(false));
    }
}
