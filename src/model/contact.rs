//! Contact form fields, validation and submission status

use serde::Serialize;
use thiserror::Error;

/// Which form field has the cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Phone,
    Company,
    ProjectType,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::ProjectType,
        FormField::Message,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::Company,
            Self::Company => Self::ProjectType,
            Self::ProjectType => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::Company => Self::Phone,
            Self::ProjectType => Self::Company,
            Self::Message => Self::ProjectType,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Email => "Email *",
            Self::Phone => "Phone",
            Self::Company => "Company",
            Self::ProjectType => "Project type *",
            Self::Message => "Message *",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Website,
    Webapp,
    Ecommerce,
    Mobile,
    Design,
    Consulting,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 7] = [
        ProjectType::Website,
        ProjectType::Webapp,
        ProjectType::Ecommerce,
        ProjectType::Mobile,
        ProjectType::Design,
        ProjectType::Consulting,
        ProjectType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website Development",
            Self::Webapp => "Web Application",
            Self::Ecommerce => "E-commerce",
            Self::Mobile => "Mobile App",
            Self::Design => "UI/UX Design",
            Self::Consulting => "Consulting",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// A validated form, ready to hand to a submitter
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub project_type: ProjectType,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
    pub focused: FormField,
    pub status: SubmissionStatus,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ContactForm {
    fn text_field_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Company => Some(&mut self.company),
            FormField::Message => Some(&mut self.message),
            FormField::ProjectType => None,
        }
    }

    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
            FormField::ProjectType => self.project_type.map(ProjectType::label).unwrap_or(""),
        }
    }

    /// Fields are read-only while a submission is in flight or just succeeded.
    pub fn is_locked(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting | SubmissionStatus::Submitted)
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn type_char(&mut self, c: char) {
        if self.is_locked() {
            return;
        }
        let focused = self.focused;
        if let Some(value) = self.text_field_mut(focused) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_locked() {
            return;
        }
        let focused = self.focused;
        if let Some(value) = self.text_field_mut(focused) {
            value.pop();
        }
    }

    /// Step through project types; `None` ("Select project type") sits before the first.
    pub fn cycle_project_type(&mut self, forward: bool) {
        if self.is_locked() {
            return;
        }
        let all = ProjectType::ALL;
        let current = self.project_type.and_then(|p| all.iter().position(|x| *x == p));
        self.project_type = match (current, forward) {
            (None, true) => Some(all[0]),
            (None, false) => Some(all[all.len() - 1]),
            (Some(i), true) if i + 1 < all.len() => Some(all[i + 1]),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(all[i - 1]),
        };
    }

    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        let name = optional(&self.name).ok_or(FormError::Missing("Name"))?;
        let email = optional(&self.email).ok_or(FormError::Missing("Email"))?;
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty());
        if !valid_email {
            return Err(FormError::InvalidEmail(email));
        }
        let project_type = self.project_type.ok_or(FormError::Missing("Project type"))?;
        let message = optional(&self.message).ok_or(FormError::Missing("Message"))?;

        Ok(ContactSubmission {
            name,
            email,
            phone: optional(&self.phone),
            company: optional(&self.company),
            project_type,
            message,
        })
    }

    /// Clear every field and return to `Idle`
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project_type: Some(ProjectType::Webapp),
            message: "We need a dashboard".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_validate_ok_trims_optional_fields() {
        let mut form = filled();
        form.phone = "   ".into();
        form.company = " Acme ".into();

        let submission = form.validate().unwrap();
        assert_eq!(submission.phone, None);
        assert_eq!(submission.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled();
        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::Missing("Name")));

        let mut form = filled();
        form.project_type = None;
        assert_eq!(form.validate(), Err(FormError::Missing("Project type")));
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut form = filled();
        form.email = "ada.example.com".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidEmail(_))));
        form.email = "@example.com".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidEmail(_))));
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = ContactForm::default();
        form.type_char('J');
        form.focus_next();
        form.type_char('j');
        form.type_char('x');
        form.backspace();
        assert_eq!(form.name, "J");
        assert_eq!(form.email, "j");
    }

    #[test]
    fn test_locked_while_submitting() {
        let mut form = filled();
        form.status = SubmissionStatus::Submitting;
        form.type_char('!');
        form.cycle_project_type(true);
        assert_eq!(form.name, "Ada");
        assert_eq!(form.project_type, Some(ProjectType::Webapp));
    }

    #[test]
    fn test_project_type_cycle_passes_through_unselected() {
        let mut form = ContactForm::default();
        form.cycle_project_type(false);
        assert_eq!(form.project_type, Some(ProjectType::Other));
        form.cycle_project_type(true);
        assert_eq!(form.project_type, None);
        form.cycle_project_type(true);
        assert_eq!(form.project_type, Some(ProjectType::Website));
    }

    #[test]
    fn test_submission_serializes_without_empty_optionals() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();
        assert_eq!(json["project_type"], "webapp");
        assert!(json.get("phone").is_none());
    }
}
