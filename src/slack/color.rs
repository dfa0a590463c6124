use std::fmt;

/// The colours supported for an attachment's left-hand sidebar.
///
/// <https://api.slack.com/reference/messaging/attachments#fields>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Grey,
    Red,
    Green,
    Blue,
}

impl Color {
    /// Look up a colour by the name a user would type. Names are matched
    /// exactly; anything else isn't a colour we know about.
    ///
    /// ```
    /// assert_eq!(Color::from_name("red"), Some(Color::Red));
    /// assert_eq!(Color::from_name("Red"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "grey" => Some(Color::Grey),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            _ => None,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Color::Grey => "#CCCCCC",
            Color::Red => "#BB0000",
            Color::Green => "#7CD197",
            Color::Blue => "#103FFB",
        }
    }
}

/// Slack wants the hex code, so that's what we print.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_known_names() {
        let cases = [
            ("grey", "#CCCCCC"),
            ("red", "#BB0000"),
            ("green", "#7CD197"),
            ("blue", "#103FFB"),
        ];

        for (name, hex) in cases {
            let color = Color::from_name(name).unwrap();
            assert_eq!(color.hex(), hex);
            assert_eq!(color.to_string(), hex);
        }
    }

    #[test]
    fn test_near_misses() {
        for name in ["", "gray", "Grey", "RED", " blue", "#CCCCCC"] {
            assert_eq!(Color::from_name(name), None);
        }
    }

    quickcheck! {
        fn test_unknown_names_are_none(x: String) -> bool {
            let known = ["grey", "red", "green", "blue"].contains(&x.as_str());
            Color::from_name(&x).is_some() == known
        }
    }
}
