use crate::template;
use std::fmt;

/// One argument on the loosely-typed call path.
///
/// Strings pass through by reference; everything else is boxed into a
/// `dyn Display` so heterogeneous arguments fit one container. The box is
/// the per-argument heap allocation the formatted path pays for.
pub enum Value<'a> {
    Str(&'a str),
    Boxed(Box<dyn fmt::Display + Send + Sync + 'a>),
}

impl<'a> Value<'a> {
    pub fn str(s: &'a str) -> Self {
        Value::Str(s)
    }

    pub fn boxed<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'a,
    {
        Value::Boxed(Box::new(value))
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Boxed(value) => value.fmt(f),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Boxed(value) => write!(f, "Boxed({})", value),
        }
    }
}

/// Loosely-typed log state: a message template plus the argument container.
///
/// Constructing one always allocates the `Vec`, whether or not any sink ends
/// up rendering it.
pub struct FormattedValues<'a> {
    template: &'a str,
    values: Vec<Value<'a>>,
}

impl<'a> FormattedValues<'a> {
    pub fn new(template: &'a str, values: Vec<Value<'a>>) -> Self {
        Self { template, values }
    }

    pub fn template(&self) -> &str {
        self.template
    }

    pub fn values(&self) -> &[Value<'a>] {
        &self.values
    }
}

impl fmt::Display for FormattedValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        template::render(self.template, &self.values, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_through_template() {
        let state = FormattedValues::new(
            "a={A} b={B}",
            vec![Value::str("x"), Value::boxed(7u32)],
        );
        assert_eq!(state.to_string(), "a=x b=7");
        assert_eq!(state.template(), "a={A} b={B}");
        assert_eq!(state.values().len(), 2);
    }
}
