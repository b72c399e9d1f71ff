//! Catalog Store
//!
//! Owns the ordered collection of groups and their cases. Every mutation
//! is synchronous and atomic; derived stats are recomputed on each read.

use crate::models::{CaseDraft, CaseStatus, DeleteTarget, Stats, TestCase, TestGroup};

/// Errors surfaced to the user when a mutation is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Please create a group first.")]
    NoGroups,
    #[error("That group no longer exists.")]
    NoSuchGroup,
}

/// The full ordered collection of groups, root of all session state
///
/// Ids are `g{n}` / `c{n}` drawn from a single monotonic counter, so they
/// are unique across the catalog for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<TestGroup>,
    next_id: u64,
}

impl Catalog {
    /// Build a catalog from pre-made groups (seed data)
    ///
    /// `next_id` must be past every numeric suffix already in use.
    pub fn new(groups: Vec<TestGroup>, next_id: u64) -> Self {
        Self { groups, next_id }
    }

    pub fn groups(&self) -> &[TestGroup] {
        &self.groups
    }

    /// Look up a group by id
    pub fn group(&self, group_id: &str) -> Option<&TestGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    /// Append a new empty group with a default title; always succeeds
    ///
    /// Returns the new group's id.
    pub fn add_group(&mut self) -> String {
        let id = self.fresh_id("g");
        self.groups.push(TestGroup {
            id: id.clone(),
            title: "New Test Group".to_string(),
            cases: Vec::new(),
        });
        id
    }

    /// Create a case from a draft and append it to a group
    ///
    /// `dest` names the destination group; `None` falls back to the first
    /// group in catalog order. Titles are trimmed, and a title that is
    /// empty after trimming is rejected. Returns the new case's id.
    pub fn add_case(&mut self, dest: Option<&str>, draft: CaseDraft) -> Result<String, CatalogError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if self.groups.is_empty() {
            return Err(CatalogError::NoGroups);
        }
        let index = match dest {
            Some(group_id) => self
                .groups
                .iter()
                .position(|g| g.id == group_id)
                .ok_or(CatalogError::NoSuchGroup)?,
            None => 0,
        };
        let title = title.to_string();
        let id = self.fresh_id("c");
        self.groups[index].cases.push(TestCase {
            id: id.clone(),
            title,
            status: draft.status,
            prompt: draft.prompt,
            code: draft.code,
            preview_html: draft.preview_html,
        });
        Ok(id)
    }

    /// Rename a group; no-op on unknown id
    pub fn rename_group(&mut self, group_id: &str, title: &str) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) {
            group.title = title.to_string();
        }
    }

    /// Remove a group and all its cases; no-op on unknown id
    pub fn delete_group(&mut self, group_id: &str) {
        self.groups.retain(|g| g.id != group_id);
    }

    /// Remove a case from a group; no-op when either id is unknown
    pub fn delete_case(&mut self, group_id: &str, case_id: &str) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) {
            group.cases.retain(|c| c.id != case_id);
        }
    }

    /// Move a case to the end of another group, all fields preserved
    ///
    /// Silent no-op when source and destination are the same group, when
    /// either group id is unknown, or when the case is not in the source.
    pub fn move_case(&mut self, case_id: &str, from_id: &str, to_id: &str) {
        if from_id == to_id {
            return;
        }
        let Some(from) = self.groups.iter().position(|g| g.id == from_id) else {
            return;
        };
        let Some(to) = self.groups.iter().position(|g| g.id == to_id) else {
            return;
        };
        let Some(pos) = self.groups[from].cases.iter().position(|c| c.id == case_id) else {
            return;
        };
        let case = self.groups[from].cases.remove(pos);
        self.groups[to].cases.push(case);
    }

    /// Dispatch a confirmed deletion to the right mutator
    pub fn apply_delete(&mut self, target: &DeleteTarget) {
        match target {
            DeleteTarget::Group { group_id } => self.delete_group(group_id),
            DeleteTarget::Case { group_id, case_id } => self.delete_case(group_id, case_id),
        }
    }

    /// Recompute derived counters from scratch
    pub fn stats(&self) -> Stats {
        let mut total = 0;
        let mut success = 0;
        for group in &self.groups {
            total += group.cases.len();
            success += group
                .cases
                .iter()
                .filter(|c| c.status == CaseStatus::Success)
                .count();
        }
        Stats {
            total,
            success,
            groups: self.groups.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaseStatus;
    use std::collections::HashSet;

    fn draft(title: &str) -> CaseDraft {
        CaseDraft {
            title: title.to_string(),
            prompt: format!("prompt for {title}"),
            code: format!("code for {title}"),
            preview_html: "<html></html>".to_string(),
            status: CaseStatus::Success,
        }
    }

    /// Every id appears exactly once, and stats match a from-scratch count
    fn assert_invariants(catalog: &Catalog) {
        let mut seen = HashSet::new();
        let mut total = 0;
        let mut success = 0;
        for group in catalog.groups() {
            assert!(seen.insert(group.id.clone()), "duplicate id {}", group.id);
            for case in &group.cases {
                assert!(seen.insert(case.id.clone()), "duplicate id {}", case.id);
                total += 1;
                if case.status == CaseStatus::Success {
                    success += 1;
                }
            }
        }
        let stats = catalog.stats();
        assert_eq!(stats.total, total);
        assert_eq!(stats.success, success);
        assert_eq!(stats.groups, catalog.groups().len());
    }

    #[test]
    fn test_add_case_to_single_group() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();

        let id = catalog
            .add_case(
                None,
                CaseDraft {
                    title: "T1".to_string(),
                    prompt: "P1".to_string(),
                    code: "C1".to_string(),
                    preview_html: "<html></html>".to_string(),
                    status: CaseStatus::Success,
                },
            )
            .unwrap();

        let group = &catalog.groups()[0];
        assert_eq!(group.id, g1);
        assert_eq!(group.cases.len(), 1);
        let case = &group.cases[0];
        assert_eq!(case.id, id);
        assert_eq!(case.title, "T1");
        assert_eq!(case.prompt, "P1");
        assert_eq!(case.code, "C1");
        assert_eq!(case.preview_html, "<html></html>");
        assert_eq!(case.status, CaseStatus::Success);
        assert_eq!(
            catalog.stats(),
            Stats {
                total: 1,
                success: 1,
                groups: 1
            }
        );
    }

    #[test]
    fn test_add_case_rejects_empty_title() {
        let mut catalog = Catalog::default();
        catalog.add_group();
        let before = catalog.groups().to_vec();

        assert_eq!(catalog.add_case(None, draft("")), Err(CatalogError::EmptyTitle));
        assert_eq!(catalog.groups(), &before[..]);
    }

    #[test]
    fn test_add_case_rejects_whitespace_only_title() {
        let mut catalog = Catalog::default();
        catalog.add_group();
        let before = catalog.groups().to_vec();

        assert_eq!(
            catalog.add_case(None, draft("  \t ")),
            Err(CatalogError::EmptyTitle)
        );
        assert_eq!(catalog.groups(), &before[..]);
    }

    #[test]
    fn test_add_case_trims_title() {
        let mut catalog = Catalog::default();
        catalog.add_group();
        catalog.add_case(None, draft("  Edge Case  ")).unwrap();
        assert_eq!(catalog.groups()[0].cases[0].title, "Edge Case");
    }

    #[test]
    fn test_add_case_requires_a_group() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.add_case(None, draft("T1")), Err(CatalogError::NoGroups));
        assert_eq!(catalog.stats(), Stats::default());
    }

    #[test]
    fn test_add_case_explicit_destination() {
        let mut catalog = Catalog::default();
        let _g1 = catalog.add_group();
        let g2 = catalog.add_group();

        catalog.add_case(Some(&g2), draft("T1")).unwrap();
        assert!(catalog.groups()[0].cases.is_empty());
        assert_eq!(catalog.groups()[1].cases.len(), 1);

        assert_eq!(
            catalog.add_case(Some("g999"), draft("T2")),
            Err(CatalogError::NoSuchGroup)
        );
        assert_eq!(catalog.stats().total, 1);
    }

    #[test]
    fn test_add_case_defaults_to_first_group() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        catalog.add_group();

        catalog.add_case(None, draft("T1")).unwrap();
        assert_eq!(catalog.groups()[0].id, g1);
        assert_eq!(catalog.groups()[0].cases.len(), 1);
    }

    #[test]
    fn test_move_case_between_groups() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let g2 = catalog.add_group();
        let x = catalog.add_case(Some(&g1), draft("X")).unwrap();
        let original = catalog.groups()[0].cases[0].clone();

        catalog.move_case(&x, &g1, &g2);

        assert!(catalog.groups()[0].cases.is_empty());
        assert_eq!(catalog.groups()[1].cases, vec![original]);
        assert_invariants(&catalog);
    }

    #[test]
    fn test_move_case_round_trip_preserves_fields() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let g2 = catalog.add_group();
        catalog.add_case(Some(&g1), draft("A")).unwrap();
        let x = catalog.add_case(Some(&g1), draft("X")).unwrap();
        let before = catalog.groups()[0].cases[1].clone();

        catalog.move_case(&x, &g1, &g2);
        catalog.move_case(&x, &g2, &g1);

        // Back in g1 with every field intact; position within the group
        // is not restored (the case re-enters at the end).
        let group = &catalog.groups()[0];
        assert!(catalog.groups()[1].cases.is_empty());
        let restored = group.cases.iter().find(|c| c.id == x).unwrap();
        assert_eq!(restored, &before);
        assert_eq!(group.cases.last().map(|c| c.id.as_str()), Some(x.as_str()));
    }

    #[test]
    fn test_move_case_same_group_is_noop() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        catalog.add_case(Some(&g1), draft("A")).unwrap();
        catalog.add_case(Some(&g1), draft("B")).unwrap();
        let before = catalog.groups().to_vec();

        let a = before[0].cases[0].id.clone();
        catalog.move_case(&a, &g1, &g1);
        assert_eq!(catalog.groups(), &before[..]);
    }

    #[test]
    fn test_move_case_missing_references_are_noops() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let g2 = catalog.add_group();
        let x = catalog.add_case(Some(&g1), draft("X")).unwrap();
        let before = catalog.groups().to_vec();

        catalog.move_case("c999", &g1, &g2); // unknown case
        catalog.move_case(&x, "g999", &g2); // unknown source
        catalog.move_case(&x, &g1, "g999"); // unknown destination
        catalog.move_case(&x, &g2, &g1); // case not in claimed source
        assert_eq!(catalog.groups(), &before[..]);
    }

    #[test]
    fn test_delete_group_cascades() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let g2 = catalog.add_group();
        catalog.add_case(Some(&g1), draft("A")).unwrap();
        catalog.add_case(Some(&g1), draft("B")).unwrap();
        catalog.add_case(Some(&g2), draft("C")).unwrap();

        let before = catalog.stats();
        catalog.delete_group(&g1);

        let after = catalog.stats();
        assert_eq!(after.total, before.total - 2);
        assert_eq!(after.groups, before.groups - 1);
        assert!(catalog.groups().iter().all(|g| g.id != g1));
        assert_invariants(&catalog);
    }

    #[test]
    fn test_deletes_are_idempotent() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let a = catalog.add_case(Some(&g1), draft("A")).unwrap();

        catalog.delete_case(&g1, &a);
        catalog.delete_case(&g1, &a); // already gone
        catalog.delete_case("g999", &a); // unknown group
        catalog.delete_group("g999"); // unknown group
        assert_eq!(catalog.stats().total, 0);
        assert_eq!(catalog.stats().groups, 1);

        catalog.delete_group(&g1);
        catalog.delete_group(&g1);
        assert_eq!(catalog.stats().groups, 0);
    }

    #[test]
    fn test_apply_delete_dispatch() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let g2 = catalog.add_group();
        let a = catalog.add_case(Some(&g1), draft("A")).unwrap();

        catalog.apply_delete(&DeleteTarget::Case {
            group_id: g1.clone(),
            case_id: a,
        });
        assert!(catalog.groups()[0].cases.is_empty());

        catalog.apply_delete(&DeleteTarget::Group { group_id: g2 });
        assert_eq!(catalog.stats().groups, 1);
    }

    #[test]
    fn test_group_lookup_tracks_mutations() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        let g2 = catalog.add_group();
        let x = catalog.add_case(Some(&g2), draft("X")).unwrap();

        assert!(catalog.group(&g1).unwrap().cases.is_empty());
        assert!(catalog.group("g999").is_none());

        // A mutation elsewhere must be visible through a fresh lookup
        catalog.move_case(&x, &g2, &g1);
        assert_eq!(catalog.group(&g1).unwrap().cases[0].id, x);
        assert!(catalog.group(&g2).unwrap().cases.is_empty());

        catalog.delete_group(&g1);
        assert!(catalog.group(&g1).is_none());
    }

    #[test]
    fn test_rename_group() {
        let mut catalog = Catalog::default();
        let g1 = catalog.add_group();
        catalog.rename_group(&g1, "Regression Suite");
        assert_eq!(catalog.groups()[0].title, "Regression Suite");
        catalog.rename_group("g999", "nope");
        assert_eq!(catalog.groups().len(), 1);
    }

    #[test]
    fn test_stats_counts_failures_separately() {
        let mut catalog = Catalog::default();
        catalog.add_group();
        catalog.add_case(None, draft("ok")).unwrap();
        let mut failing = draft("bad");
        failing.status = CaseStatus::Fail;
        catalog.add_case(None, failing).unwrap();

        assert_eq!(
            catalog.stats(),
            Stats {
                total: 2,
                success: 1,
                groups: 1
            }
        );
    }

    #[test]
    fn test_randomized_mutation_sequence_keeps_invariants() {
        // Deterministic LCG so the sequence is reproducible
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move |bound: u64| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) % bound
        };

        let mut catalog = Catalog::default();
        for step in 0..500 {
            let groups: Vec<String> = catalog.groups().iter().map(|g| g.id.clone()).collect();
            match next(5) {
                0 => {
                    catalog.add_group();
                }
                1 => {
                    let dest = if groups.is_empty() {
                        None
                    } else {
                        Some(groups[next(groups.len() as u64) as usize].clone())
                    };
                    let mut d = draft(&format!("case {step}"));
                    if next(3) == 0 {
                        d.status = CaseStatus::Fail;
                    }
                    let _ = catalog.add_case(dest.as_deref(), d);
                }
                2 => {
                    if !groups.is_empty() {
                        let gid = &groups[next(groups.len() as u64) as usize];
                        catalog.delete_group(gid);
                    }
                }
                3 => {
                    if !groups.is_empty() {
                        let gid = &groups[next(groups.len() as u64) as usize];
                        let cid = catalog
                            .groups()
                            .iter()
                            .find(|g| &g.id == gid)
                            .and_then(|g| g.cases.first())
                            .map(|c| c.id.clone());
                        if let Some(cid) = cid {
                            catalog.delete_case(gid, &cid);
                        }
                    }
                }
                _ => {
                    if groups.len() >= 2 {
                        let from = &groups[next(groups.len() as u64) as usize];
                        let to = &groups[next(groups.len() as u64) as usize];
                        let cid = catalog
                            .groups()
                            .iter()
                            .find(|g| &g.id == from)
                            .and_then(|g| g.cases.first())
                            .map(|c| c.id.clone());
                        if let Some(cid) = cid {
                            catalog.move_case(&cid, from, to);
                        }
                    }
                }
            }
            assert_invariants(&catalog);
        }
    }
}
