use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Controlled contact form. Values are taken verbatim; nothing is validated or sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    focused: Option<Field>,
}

pub enum ContactAction {
    Input(Field, String),
    Focus(Field),
    Blur,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused == Some(field)
    }

    /// Character (not byte) length of each field, in field order.
    pub fn char_counts(&self) -> [usize; 3] {
        [Field::Name, Field::Email, Field::Message].map(|field| self.value(field).chars().count())
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Input(field, value) => next.set(field, value),
            ContactAction::Focus(field) => next.focused = Some(field),
            ContactAction::Blur => next.focused = None,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_name_touches_only_name() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(ContactAction::Input(Field::Name, "Jane".to_string()));
        assert_eq!(form.value(Field::Name), "Jane");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn test_no_validation() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "not an email".to_string());
        form.set(Field::Message, String::new());
        assert_eq!(form.email, "not an email");
    }

    #[test]
    fn test_focus_and_blur() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(ContactAction::Focus(Field::Email));
        assert!(form.is_focused(Field::Email));
        assert!(!form.is_focused(Field::Name));

        let form = form.reduce(ContactAction::Focus(Field::Message));
        assert!(form.is_focused(Field::Message));
        assert!(!form.is_focused(Field::Email));

        let form = form.reduce(ContactAction::Blur);
        assert_eq!(form.focused, None);
    }

    #[test]
    fn test_char_counts_are_not_byte_lengths() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Zoë".to_string());
        form.set(Field::Email, "zoë@exämple.com".to_string());
        form.set(Field::Message, "Hi 👋".to_string());

        assert_eq!(form.char_counts(), [3, 15, 4]);
        assert_ne!(form.name.len(), 3);
    }
}
