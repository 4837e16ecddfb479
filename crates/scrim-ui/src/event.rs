/// Named keys the scroll containers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Input events routed through the widget tree.
///
/// The fade overlay itself is input-inert; only the scroll containers
/// consume events, and only the ones that move content.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Mouse wheel / trackpad scroll.
    ///
    /// `delta` > 0 → scroll down (reveal content below); < 0 → scroll up.
    ScrollWheel { delta: f32 },
    /// Named key pressed.
    KeyPress { key: Key },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
