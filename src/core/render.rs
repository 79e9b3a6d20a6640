use crate::core::DoctorRecord;
use maud::{html, Markup, Render};

pub const NO_RESULTS_TEXT: &str = "No doctors found";

pub(crate) struct NoResults;

impl Render for NoResults {
    fn render(&self) -> Markup {
        html! {
            div class="col-12 text-center text-muted" { (NO_RESULTS_TEXT) }
        }
    }
}

/// 單張醫師卡片。選擇按鈕沒有綁定任何行為，只帶上 `data-doctor-id` 供頁面使用。
pub(crate) struct DoctorCard<'a>(pub &'a DoctorRecord);

impl Render for DoctorCard<'_> {
    fn render(&self) -> Markup {
        let doctor = self.0;
        html! {
            div class="col-md-4" {
                div class="card mb-4 doctor-card" {
                    div class="card-body" {
                        h5 { (doctor.name) }
                        p {
                            strong { "Specialization:" } " " (doctor.specialization)
                            br;
                            strong { "Email:" } " " (doctor.email)
                        }
                        button type="button" class="btn btn-success w-100" data-doctor-id=[doctor.id] {
                            "Select Doctor"
                        }
                    }
                }
            }
        }
    }
}

/// Renders the markup that replaces the results container: the placeholder for an
/// empty result, otherwise one card per record in the given order.
///
/// Record fields are interpolated as text and therefore HTML-escaped.
pub fn render_records(records: &[DoctorRecord]) -> String {
    let markup = if records.is_empty() {
        NoResults.render()
    } else {
        html! {
            @for doctor in records {
                (DoctorCard(doctor))
            }
        }
    };

    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_MARKER: &str = r#"class="card mb-4 doctor-card""#;

    #[test]
    fn test_empty_result_renders_placeholder_only() {
        let html = render_records(&[]);

        assert_eq!(
            html,
            r#"<div class="col-12 text-center text-muted">No doctors found</div>"#
        );
        assert_eq!(html.matches(CARD_MARKER).count(), 0);
    }

    #[test]
    fn test_single_card_markup() {
        let html = render_records(&[DoctorRecord::new("Dr. A", "GP", "a@x.com")]);

        assert_eq!(
            html,
            concat!(
                r#"<div class="col-md-4"><div class="card mb-4 doctor-card"><div class="card-body">"#,
                r#"<h5>Dr. A</h5>"#,
                r#"<p><strong>Specialization:</strong> GP<br><strong>Email:</strong> a@x.com</p>"#,
                r#"<button type="button" class="btn btn-success w-100">Select Doctor</button>"#,
                r#"</div></div></div>"#,
            )
        );
    }

    #[test]
    fn test_cards_follow_record_order() {
        let records = vec![
            DoctorRecord::new("Dr. B", "ENT", "b@x.com"),
            DoctorRecord::new("Dr. C", "Cardio", "c@x.com"),
            DoctorRecord::new("Dr. A", "GP", "a@x.com"),
        ];

        let html = render_records(&records);

        assert_eq!(html.matches(CARD_MARKER).count(), 3);
        assert!(!html.contains(NO_RESULTS_TEXT));

        let b = html.find("<h5>Dr. B</h5>").unwrap();
        let c = html.find("<h5>Dr. C</h5>").unwrap();
        let a = html.find("<h5>Dr. A</h5>").unwrap();
        assert!(b < c && c < a);
    }

    #[test]
    fn test_fields_are_escaped() {
        let records = vec![DoctorRecord::new(
            "<script>alert(1)</script>",
            "Ear & Throat",
            "\"quoted\"@x.com",
        )];

        let html = render_records(&records);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Ear &amp; Throat"));
        assert!(html.contains("&quot;quoted&quot;@x.com"));
    }

    #[test]
    fn test_select_button_carries_doctor_id() {
        let html = render_records(&[DoctorRecord::new("Dr. A", "GP", "a@x.com").with_id(42)]);

        assert!(html.contains(r#"data-doctor-id="42""#));
    }
}
