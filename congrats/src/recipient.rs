#[derive(Debug, Clone)]
pub struct Recipient {
    pub name: String,
    pub age: i64,
    pub interests: Vec<String>,
}

impl Recipient {
    pub fn new(name: impl Into<String>, age: i64, interests: Vec<String>) -> Self {
        Self {
            name: name.into(),
            age,
            interests,
        }
    }

    /// Interests joined for the prompt, original order preserved.
    pub fn interests_line(&self) -> String {
        self.interests.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use crate::recipient::Recipient;

    #[test]
    fn interests_keep_their_order() {
        let recipient = Recipient::new(
            "Alice",
            30,
            vec!["chess".to_string(), "hiking".to_string(), "jazz".to_string()],
        );

        assert_eq!(recipient.interests_line(), "chess, hiking, jazz");
    }

    #[test]
    fn single_interest_has_no_separator() {
        let recipient = Recipient::new("Bob", 41, vec!["fishing".to_string()]);

        assert_eq!(recipient.interests_line(), "fishing");
    }
}
