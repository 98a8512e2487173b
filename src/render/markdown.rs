use std::sync::OnceLock;

use minijinja::{Environment, context};

use crate::entities::label::LabelRecord;
use crate::error::MedGuideError;

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn env() -> Result<&'static Environment<'static>, MedGuideError> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }

    let mut env = Environment::new();
    env.add_template("label.md.j2", include_str!("../../templates/label.md.j2"))?;
    env.add_template(
        "suggest.md.j2",
        include_str!("../../templates/suggest.md.j2"),
    )?;

    Ok(ENV.get_or_init(move || env))
}

pub(crate) fn render_label(name: &str, record: &LabelRecord) -> Result<String, MedGuideError> {
    let summary = crate::transform::label::summarize(record);
    let template = env()?.get_template("label.md.j2")?;
    Ok(template.render(context! { name, record, summary })?)
}

pub(crate) fn render_suggestions(query: &str, names: &[String]) -> Result<String, MedGuideError> {
    let template = env()?.get_template("suggest.md.j2")?;
    Ok(template.render(context! { query, names })?)
}

pub(crate) fn render_no_record(name: &str) -> String {
    format!("No instructions found for \"{name}\".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_render_lists_all_sections() {
        let record = LabelRecord {
            indications: vec!["Type 2 diabetes".into()],
            dosage: vec!["500 mg twice daily".into()],
            interactions: vec!["Avoid iodinated contrast".into()],
            precautions: vec!["Monitor renal function".into()],
        };

        let out = render_label("Metformin", &record).expect("render");
        assert!(out.contains("# Metformin"));
        assert!(out.contains("## Key Patient Instructions"));
        assert!(out.contains("**Main Indication:** Type 2 diabetes"));
        assert!(out.contains("**Administration:** 500 mg twice daily"));
        assert!(out.contains("**Important Instructions:** Avoid iodinated contrast"));
        assert!(out.contains("## Indications & Usage"));
        assert!(out.contains("- Type 2 diabetes"));
        assert!(out.contains("## Dosage & Administration"));
        assert!(out.contains("## Interactions & Precautions"));
        assert!(out.contains("- Monitor renal function"));
    }

    #[test]
    fn label_render_of_empty_record_shows_sentinels_and_no_data() {
        let record = LabelRecord::default();

        let out = render_label("Mystery", &record).expect("render");
        assert!(out.contains("**Main Indication:** Not available."));
        assert!(out.contains("**Administration:** Not available."));
        assert!(out.contains("**Important Instructions:** None noted."));
        assert!(out.contains("No data."));
        assert!(
            !out.contains("## Interactions & Precautions"),
            "section is omitted when both lists are empty"
        );
    }

    #[test]
    fn suggestion_render_lists_names_in_order() {
        let names = vec!["Metformin".to_string(), "Metforminol".to_string()];
        let out = render_suggestions("metform", &names).expect("render");
        assert!(out.contains("Suggestions for \"metform\""));
        let metformin = out.find("- Metformin").expect("first name");
        let metforminol = out.find("- Metforminol").expect("second name");
        assert!(metformin < metforminol);
    }

    #[test]
    fn suggestion_render_has_an_empty_state() {
        let out = render_suggestions("zzz", &[]).expect("render");
        assert!(out.contains("No matching drug names found"));
    }

    #[test]
    fn no_record_message_names_the_drug() {
        assert_eq!(
            render_no_record("Aspirin"),
            "No instructions found for \"Aspirin\"."
        );
    }
}
