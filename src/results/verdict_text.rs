use crate::check::Verdict;

/// Plain-text verdict for non-interactive output
pub fn format_verdict(verdict: &Verdict) -> String {
    let mut lines = vec![
        format!("Result for: {}", verdict.flower),
        format!("Verified: {}", if verdict.verified { "yes" } else { "no" }),
        verdict.message.clone(),
    ];

    if let Some(note) = verdict.visible_note() {
        lines.push(format!("Note: {}", note));
    }

    lines.push(format!("Source: {}", verdict.source));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn snapshot_unverified_verdict_with_note() {
        let verdict = Verdict {
            flower: "Lilies".to_string(),
            verified: false,
            message: "Toxic".to_string(),
            note: Some("Contact a vet".to_string()),
            source: "LLM".to_string(),
        };

        assert_snapshot!(format_verdict(&verdict), @r"
        Result for: Lilies
        Verified: no
        Toxic
        Note: Contact a vet
        Source: LLM
        ");
    }

    #[test]
    fn snapshot_verified_verdict_hides_note() {
        let verdict = Verdict {
            flower: "roses".to_string(),
            verified: true,
            message: "Roses are safe (watch for thorns).".to_string(),
            note: Some("ignored".to_string()),
            source: "database".to_string(),
        };

        assert_snapshot!(format_verdict(&verdict), @r"
        Result for: roses
        Verified: yes
        Roses are safe (watch for thorns).
        Source: database
        ");
    }
}
