//! Group processed requirements by category

use crate::types::{ProcessedRequirement, RequirementGroup};
use mandate_domain::{Category, RequirementKind};
use std::collections::HashMap;

/// Partition requirements into category groups
///
/// Groups appear in first-seen category order and members keep their
/// input order. Each group is labeled with a theme naming the dominant
/// pattern inside it.
pub fn build_groups(requirements: &[ProcessedRequirement]) -> Vec<RequirementGroup> {
    let mut buckets: Vec<(Category, Vec<&ProcessedRequirement>)> = Vec::new();
    let mut positions: HashMap<Category, usize> = HashMap::new();

    for requirement in requirements {
        match positions.get(&requirement.category) {
            Some(&index) => buckets[index].1.push(requirement),
            None => {
                positions.insert(requirement.category, buckets.len());
                buckets.push((requirement.category, vec![requirement]));
            }
        }
    }

    buckets
        .into_iter()
        .map(|(category, members)| RequirementGroup {
            name: category,
            theme: group_theme(category, &members),
            members: members.iter().map(|r| r.id.clone()).collect(),
        })
        .collect()
}

/// Theme label `<category>-<dominant pattern code>`
///
/// Ties go to the pattern seen first; an empty member list falls back to
/// a "mixed" suffix.
fn group_theme(category: Category, members: &[&ProcessedRequirement]) -> String {
    let mut counts: Vec<(RequirementKind, usize)> = Vec::new();
    for member in members {
        match counts.iter_mut().find(|(kind, _)| *kind == member.pattern) {
            Some((_, count)) => *count += 1,
            None => counts.push((member.pattern, 1)),
        }
    }

    let mut dominant: Option<(RequirementKind, usize)> = None;
    for (kind, count) in counts {
        match dominant {
            Some((_, best)) if count <= best => {}
            _ => dominant = Some((kind, count)),
        }
    }

    match dominant {
        Some((kind, _)) => format!("{}-{}", category, kind.code()),
        None => format!("{}-mixed", category),
    }
}
