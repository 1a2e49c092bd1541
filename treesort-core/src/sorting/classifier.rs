//! First-match-wins assignment of entries to groups.

use super::classified::ClassifiedEntry;
use super::matchers::{Anchor, NameMatch, match_head_and_tail, match_name};
use super::metadata::{has_metadata_field, resolve_metadata_levels};
use super::shadow::ShadowGroups;
use crate::context::SortContext;
use tracing::{trace, warn};
use treesort_model::{GroupKind, SortGroup, SortSpec, TreeEntry};

#[derive(Debug, Default)]
struct GroupHit {
    derived: Option<String>,
    bookmark_rank: Option<u32>,
}

/// Classifies one entry against `spec`, matching with the pass's shadow
/// groups. Every entry ends up in a group or at the past-the-end index.
pub fn classify<'a>(
    entry: &'a TreeEntry,
    spec: &SortSpec,
    shadow: &ShadowGroups<'_>,
    ctx: &SortContext<'_>,
) -> ClassifiedEntry<'a> {
    let mut classified = match find_group(entry, spec, shadow, ctx) {
        Some((idx, hit)) => {
            let group_idx = redirect(spec, idx);
            let mut classified =
                ClassifiedEntry::new(entry, group_idx).with_derived_text(hit.derived);
            classified.bookmark_rank = hit.bookmark_rank;
            classified
        }
        None => ClassifiedEntry::new(entry, outsider_group(entry, spec)),
    };
    trace!(
        path = entry.path(),
        group = classified.group_idx,
        sort_string = %classified.sort_string,
        "classified entry"
    );
    resolve_metadata_levels(&mut classified, spec, ctx);
    classified
}

fn find_group(
    entry: &TreeEntry,
    spec: &SortSpec,
    shadow: &ShadowGroups<'_>,
    ctx: &SortContext<'_>,
) -> Option<(usize, GroupHit)> {
    let is_folder = entry.is_folder();
    for idx in spec.evaluation_order() {
        let Some(group) = shadow.get(idx) else {
            warn!(index = idx, groups = shadow.len(), "priority order names a missing group");
            continue;
        };
        if (group.files_only && is_folder) || (group.folders_only && !is_folder) {
            continue;
        }
        if let Some(hit) = match_group(group, entry, ctx) {
            return Some((idx, hit));
        }
    }
    None
}

fn match_group(group: &SortGroup, entry: &TreeEntry, ctx: &SortContext<'_>) -> Option<GroupHit> {
    let name = if group.match_with_extension {
        entry.name()
    } else {
        entry.basename()
    };
    let from_name = |hit: Option<NameMatch>| {
        hit.map(|hit| GroupHit {
            derived: hit.derived,
            bookmark_rank: None,
        })
    };

    match &group.kind {
        GroupKind::MatchAll => Some(GroupHit::default()),
        GroupKind::Outsiders => None,
        GroupKind::ExactName { matcher } => from_name(match_name(matcher, name, Anchor::Whole)),
        GroupKind::ExactPrefix { matcher } => from_name(match_name(matcher, name, Anchor::Head)),
        GroupKind::ExactSuffix { matcher } => from_name(match_name(matcher, name, Anchor::Tail)),
        GroupKind::ExactHeadAndTail { head, tail } => {
            from_name(match_head_and_tail(head, tail, name))
        }
        GroupKind::HasMetadataField => {
            let field = group.with_metadata_field.as_deref()?;
            has_metadata_field(entry, field, ctx).then(GroupHit::default)
        }
        GroupKind::BookmarkedOnly => {
            let rank = ctx
                .lookups
                .bookmarks?
                .order_of(entry.path())
                .filter(|rank| *rank > 0)?;
            Some(GroupHit {
                derived: None,
                bookmark_rank: Some(rank),
            })
        }
        GroupKind::HasIcon { icon_name } => {
            let icon = ctx.lookups.icons?.icon_of(entry)?;
            match icon_name {
                Some(wanted) if *wanted != icon => None,
                _ => Some(GroupHit::default()),
            }
        }
    }
}

/// Index an entry matched by group `idx` is sorted under.
fn redirect(spec: &SortSpec, idx: usize) -> usize {
    match spec.groups.get(idx).and_then(|group| group.combine_with) {
        Some(target) if target < spec.groups.len() => target,
        Some(target) => {
            warn!(group = idx, target, "combine_with names a missing group");
            idx
        }
        None => idx,
    }
}

fn outsider_group(entry: &TreeEntry, spec: &SortSpec) -> usize {
    let specific = if entry.is_folder() {
        spec.outsiders_folders_group
    } else {
        spec.outsiders_files_group
    };
    [specific, spec.outsiders_group]
        .into_iter()
        .flatten()
        .find(|&idx| {
            let valid = idx < spec.groups.len();
            if !valid {
                warn!(index = idx, "outsiders bucket names a missing group");
            }
            valid
        })
        .unwrap_or_else(|| spec.past_the_end())
}
