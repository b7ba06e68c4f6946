//! Field lists for the contact and cuisine suggestion forms.

use super::{FormEngine, FormFieldDescriptor, InputKind};

/// The contact form: name, email, optional phone, subject and message.
#[must_use]
pub fn contact_form() -> FormEngine {
    FormEngine::new(vec![
        FormFieldDescriptor::new("name", "Full Name", InputKind::Text)
            .required()
            .placeholder("Enter your full name"),
        FormFieldDescriptor::new("email", "Email Address", InputKind::Email)
            .required()
            .placeholder("Enter your email address"),
        FormFieldDescriptor::new("phone", "Phone Number", InputKind::Tel)
            .placeholder("+91 9999999999"),
        FormFieldDescriptor::new("subject", "Subject", InputKind::Text)
            .required()
            .placeholder("What is this about?"),
        FormFieldDescriptor::new("message", "Message", InputKind::Textarea)
            .required()
            .placeholder("Tell us more..."),
    ])
}

/// The cuisine suggestion form with its nine fields.
#[must_use]
pub fn suggestion_form() -> FormEngine {
    FormEngine::new(vec![
        FormFieldDescriptor::new("cuisineName", "Cuisine Name", InputKind::Text)
            .required()
            .placeholder("e.g., Ethiopian Cuisine"),
        FormFieldDescriptor::new("country", "Country/Region", InputKind::Text)
            .required()
            .placeholder("e.g., Ethiopia"),
        FormFieldDescriptor::new("category", "Category", InputKind::Text)
            .required()
            .placeholder("e.g., African"),
        FormFieldDescriptor::new("description", "Brief Description", InputKind::Textarea)
            .required()
            .placeholder("Describe the cuisine's characteristics..."),
        FormFieldDescriptor::new("keyIngredients", "Key Ingredients", InputKind::Textarea)
            .required()
            .placeholder("List the main ingredients..."),
        FormFieldDescriptor::new("popularDishes", "Popular Dishes", InputKind::Textarea)
            .required()
            .placeholder("Name some signature dishes..."),
        FormFieldDescriptor::new("culturalSignificance", "Cultural Significance", InputKind::Textarea)
            .placeholder("Share the cultural background (optional)"),
        FormFieldDescriptor::new("suggestedBy", "Your Name", InputKind::Text)
            .required()
            .placeholder("Enter your name"),
        FormFieldDescriptor::new("email", "Your Email", InputKind::Email)
            .required()
            .placeholder("Enter your email"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn fill(form: &mut FormEngine, pairs: &[(&str, &str)]) {
        for (name, value) in pairs {
            form.set_field(name, *value).unwrap();
        }
    }

    #[test]
    fn contact_with_blank_subject_reports_only_subject() {
        let mut form = contact_form();
        fill(
            &mut form,
            &[
                ("name", "Ada Lovelace"),
                ("email", "ada@example.com"),
                ("message", "Please add Georgian food"),
            ],
        );

        assert!(!form.validate());
        let expected: BTreeMap<String, String> =
            [("subject".to_string(), "Subject is required".to_string())].into();
        assert_eq!(form.state().errors, expected);
    }

    #[test]
    fn empty_suggestion_reports_eight_required_fields() {
        let mut form = suggestion_form();
        assert_eq!(form.fields().len(), 9);
        assert!(form.submit(|_| ()).is_none());
        assert_eq!(form.state().errors.len(), 8);
        assert_eq!(form.error("culturalSignificance"), None);
        assert_eq!(form.error("keyIngredients"), Some("Key Ingredients is required"));
    }

    #[test]
    fn phone_is_optional_free_text() {
        let mut form = contact_form();
        fill(
            &mut form,
            &[
                ("name", "Ada"),
                ("email", "ada@example.com"),
                ("subject", "Hi"),
                ("message", "Hello"),
            ],
        );
        assert!(form.validate());

        form.set_field("phone", "555-0100 ext. 12").unwrap();
        assert!(form.validate());
        assert_eq!(form.error("phone"), None);
    }
}
