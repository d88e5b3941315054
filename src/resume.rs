use serde::{Deserialize, Serialize};

use crate::mailto::MailLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeField {
    JobTitle,
    CompanyName,
    JobLink,
    ApplicantName,
    ApplicantEmail,
    AdditionalInfo,
}

/// Form state of a tailored-resume request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_link: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub additional_info: String,
}

impl ResumeRequest {
    pub fn get(&self, field: ResumeField) -> &str {
        match field {
            ResumeField::JobTitle => &self.job_title,
            ResumeField::CompanyName => &self.company_name,
            ResumeField::JobLink => &self.job_link,
            ResumeField::ApplicantName => &self.applicant_name,
            ResumeField::ApplicantEmail => &self.applicant_email,
            ResumeField::AdditionalInfo => &self.additional_info,
        }
    }

    pub fn set(&mut self, field: ResumeField, value: String) {
        let slot = match field {
            ResumeField::JobTitle => &mut self.job_title,
            ResumeField::CompanyName => &mut self.company_name,
            ResumeField::JobLink => &mut self.job_link,
            ResumeField::ApplicantName => &mut self.applicant_name,
            ResumeField::ApplicantEmail => &mut self.applicant_email,
            ResumeField::AdditionalInfo => &mut self.additional_info,
        };
        *slot = value;
    }

    /// Required fields only need to be non-empty; format checks are left to
    /// the input types.
    pub fn is_valid(&self) -> bool {
        !self.job_title.is_empty()
            && !self.company_name.is_empty()
            && !self.applicant_name.is_empty()
            && !self.applicant_email.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn subject(&self) -> String {
        format!(
            "Resume Request: {} at {}",
            self.job_title, self.company_name
        )
    }

    pub fn body(&self, recipient_first_name: &str) -> String {
        let job_link = if self.job_link.is_empty() {
            "Not provided"
        } else {
            &self.job_link
        };
        let additional = if self.additional_info.is_empty() {
            String::new()
        } else {
            format!("ADDITIONAL INFORMATION:\n{}", self.additional_info)
        };
        format!(
            "Hi {recipient_first_name},\n\
             \n\
             I would like to request a tailored resume for the following opportunity:\n\
             \n\
             JOB DETAILS:\n\
             • Position: {job_title}\n\
             • Company: {company}\n\
             • Job Link: {job_link}\n\
             \n\
             MY CONTACT INFORMATION:\n\
             • Name: {name}\n\
             • Email: {email}\n\
             \n\
             {additional}\n\
             \n\
             Please let me know if you need any additional information. I look forward to hearing from you!\n\
             \n\
             Best regards,\n\
             {name}",
            job_title = self.job_title,
            company = self.company_name,
            name = self.applicant_name,
            email = self.applicant_email,
        )
    }

    pub fn mail_link(&self, to: &str, recipient_first_name: &str) -> MailLink {
        MailLink::to(to)
            .subject(self.subject())
            .body(self.body(recipient_first_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ResumeRequest {
        ResumeRequest {
            job_title: "Senior AI Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_link: String::new(),
            applicant_name: "John Smith".to_string(),
            applicant_email: "john@example.com".to_string(),
            additional_info: String::new(),
        }
    }

    #[test]
    fn test_validity_tracks_required_fields() {
        let required = [
            ResumeField::JobTitle,
            ResumeField::CompanyName,
            ResumeField::ApplicantName,
            ResumeField::ApplicantEmail,
        ];
        let mut form = ResumeRequest::default();
        assert!(!form.is_valid());
        for (i, field) in required.iter().enumerate() {
            form.set(*field, "x".to_string());
            assert_eq!(form.is_valid(), i == required.len() - 1);
        }
        for field in required {
            let mut missing_one = filled();
            missing_one.set(field, String::new());
            assert!(!missing_one.is_valid(), "{field:?} should be required");
        }
    }

    #[test]
    fn test_optional_fields_do_not_affect_validity() {
        let mut form = filled();
        assert!(form.is_valid());
        form.set(ResumeField::JobLink, "https://jobs.example.com/1".to_string());
        form.set(ResumeField::AdditionalInfo, "Focus on ML".to_string());
        assert!(form.is_valid());

        let mut only_optional = ResumeRequest::default();
        only_optional.set(ResumeField::JobLink, "https://x".to_string());
        only_optional.set(ResumeField::AdditionalInfo, "y".to_string());
        assert!(!only_optional.is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(ResumeField::JobTitle, " ".to_string());
        assert!(form.is_valid());
    }

    #[test]
    fn test_subject() {
        assert_eq!(filled().subject(), "Resume Request: Senior AI Engineer at Acme");
    }

    #[test]
    fn test_body_omits_empty_additional_info() {
        let body = filled().body("Vince");
        assert!(body.starts_with("Hi Vince,\n"));
        assert!(body.contains("• Job Link: Not provided\n"));
        assert!(!body.contains("ADDITIONAL INFORMATION"));
        assert!(body.ends_with("Best regards,\nJohn Smith"));
    }

    #[test]
    fn test_body_includes_additional_info_verbatim() {
        let mut form = filled();
        form.set(ResumeField::JobLink, "https://jobs.example.com/1".to_string());
        form.set(
            ResumeField::AdditionalInfo,
            "Highlight leadership\nand Rust".to_string(),
        );
        let body = form.body("Vince");
        assert!(body.contains("• Job Link: https://jobs.example.com/1\n"));
        assert!(body.contains("ADDITIONAL INFORMATION:\nHighlight leadership\nand Rust\n"));
    }

    #[test]
    fn test_mail_link_is_encoded() {
        let href = filled().mail_link("me@example.com", "Vince").href();
        assert!(href.starts_with(
            "mailto:me@example.com?subject=Resume%20Request%3A%20Senior%20AI%20Engineer%20at%20Acme&body=Hi%20Vince%2C%0A"
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled();
        form.set(ResumeField::AdditionalInfo, "notes".to_string());
        form.reset();
        assert_eq!(form, ResumeRequest::default());
        assert_eq!(form.get(ResumeField::JobTitle), "");
    }
}
