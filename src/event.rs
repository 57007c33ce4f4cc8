use std::fmt;

/// Numeric identity of a log message, with an optional static name.
///
/// The default id `0` stands for "unnamed event" and is what the formatted
/// convenience calls use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    id: u32,
    name: &'static str,
}

impl EventId {
    pub const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            f.write_str(self.name)
        }
    }
}
