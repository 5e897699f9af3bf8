use std::collections::HashMap;

use crate::model::{OutputRecord, PartnerGroup, PartnerRecord, SolutionRecord};
use crate::normalizer::normalize;

/// Groups solution records under their owning partner by normalized key.
///
/// Partners are seeded first, in extraction order; solutions then attach
/// in their own order, creating groups on the fly for partners absent
/// from the directory. Output preserves first-insertion order and keeps
/// the first-seen display name per key. Duplicate titles are preserved.
pub fn join(partners: &[PartnerRecord], solutions: &[SolutionRecord]) -> Vec<OutputRecord> {
    let mut groups: Vec<PartnerGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for partner in partners {
        let key = normalize(&partner.partner_name);
        index.entry(key).or_insert_with(|| {
            groups.push(PartnerGroup {
                display_name: partner.partner_name.clone(),
                solutions: Vec::new(),
            });
            groups.len() - 1
        });
    }

    for solution in solutions {
        let key = normalize(&solution.partner_name);
        if is_unattributed(&key) {
            continue;
        }
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(PartnerGroup {
                display_name: solution.partner_name.clone(),
                solutions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].solutions.push(solution.solution_title.clone());
    }

    groups
        .into_iter()
        .filter(has_solutions)
        .map(|group| OutputRecord {
            partner_name: group.display_name,
            solutions: group.solutions,
        })
        .collect()
}

/// Drop policy: a solution whose recovered partner name normalizes to the
/// empty key has no owner and contributes to no group.
fn is_unattributed(key: &str) -> bool {
    key.is_empty()
}

/// Drop policy: a partner matched to no catalog entry is excluded from
/// output, even when fully present in the directory.
fn has_solutions(group: &PartnerGroup) -> bool {
    !group.solutions.is_empty()
}

#[cfg(test)]
mod tests {
    use super::join;
    use crate::model::{OutputRecord, PartnerRecord, SolutionRecord};

    fn partner(name: &str) -> PartnerRecord {
        PartnerRecord {
            partner_name: name.to_string(),
        }
    }

    fn solution(title: &str, partner: &str) -> SolutionRecord {
        SolutionRecord {
            solution_title: title.to_string(),
            partner_name: partner.to_string(),
        }
    }

    fn record(name: &str, solutions: &[&str]) -> OutputRecord {
        OutputRecord {
            partner_name: name.to_string(),
            solutions: solutions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn directory_name_wins_over_catalog_spelling() {
        // Scenario A
        let out = join(&[partner("Acme Inc.")], &[solution("Suite X", "ACME")]);
        assert_eq!(out, vec![record("Acme Inc.", &["Suite X"])]);
    }

    #[test]
    fn partner_without_solutions_is_dropped() {
        // Scenario B
        let out = join(&[partner("Beta LLC")], &[]);
        assert_eq!(out, vec![]);
    }

    #[test]
    fn catalog_only_partner_forms_its_own_group() {
        // Scenario C
        let out = join(&[], &[solution("Y", "Gamma Corp")]);
        assert_eq!(out, vec![record("Gamma Corp", &["Y"])]);
    }

    #[test]
    fn duplicate_titles_are_preserved() {
        // Scenario D
        let out = join(
            &[],
            &[solution("Z", "Delta"), solution("Z", "Delta")],
        );
        assert_eq!(out, vec![record("Delta", &["Z", "Z"])]);
    }

    #[test]
    fn unattributed_solutions_contribute_nothing() {
        let out = join(
            &[partner("Acme")],
            &[solution("Floating", ""), solution("Suite X", "Acme")],
        );
        assert_eq!(out, vec![record("Acme", &["Suite X"])]);
    }

    #[test]
    fn suffix_only_attribution_is_also_unattributed() {
        // "Inc." normalizes to the empty key.
        let out = join(&[], &[solution("Suite", "Inc.")]);
        assert_eq!(out, vec![]);
    }

    #[test]
    fn extraction_order_is_output_order() {
        let out = join(
            &[partner("First Corp"), partner("Second Ltd"), partner("Third")],
            &[
                solution("S3", "Third"),
                solution("S1", "First Corp"),
                solution("S2", "Second Ltd"),
            ],
        );
        let names: Vec<&str> = out.iter().map(|r| r.partner_name.as_str()).collect();
        assert_eq!(names, ["First Corp", "Second Ltd", "Third"]);
    }

    #[test]
    fn duplicate_directory_entries_merge_silently() {
        let out = join(
            &[partner("Acme Inc."), partner("ACME"), partner("acme")],
            &[solution("Suite X", "Acme")],
        );
        assert_eq!(out, vec![record("Acme Inc.", &["Suite X"])]);
    }

    #[test]
    fn solutions_accumulate_in_processing_order() {
        let out = join(
            &[partner("Acme")],
            &[
                solution("B Suite", "Acme"),
                solution("A Suite", "ACME"),
                solution("C Suite", "Acme Inc."),
            ],
        );
        assert_eq!(out, vec![record("Acme", &["B Suite", "A Suite", "C Suite"])]);
    }

    #[test]
    fn empty_inputs_join_to_empty_output() {
        let out = join(&[], &[]);
        assert_eq!(out, vec![]);
    }

    #[test]
    fn serializes_with_camel_case_partner_name() {
        let out = join(&[], &[solution("Y", "Gamma Corp")]);
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "partnerName": "Gamma Corp", "solutions": ["Y"] }])
        );
    }
}
