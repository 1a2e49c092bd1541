use thiserror::Error;
use treesort_model::{GroupKind, SortSpec};

/// Structural problems in a spec handed over by the spec builder.
///
/// The engine tolerates all of these (the offending index is skipped), so
/// validation is for loaders that want to reject bad specs upfront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("{field} refers to group {index}, but the spec has {count} groups")]
    GroupIndexOutOfRange {
        field: &'static str,
        index: usize,
        count: usize,
    },

    #[error("group {0} matches on a metadata field but names none")]
    MissingMetadataField(usize),

    #[error("priority order lists group {0} more than once")]
    DuplicatePriority(usize),

    #[error("group {0} is both files-only and folders-only")]
    ContradictoryFilters(usize),
}

pub type Result<T> = std::result::Result<T, SpecError>;

fn check_index(field: &'static str, index: usize, count: usize) -> Result<()> {
    if index < count {
        Ok(())
    } else {
        Err(SpecError::GroupIndexOutOfRange {
            field,
            index,
            count,
        })
    }
}

/// Checks every group index a spec refers to and each group's own flags.
pub fn validate_spec(spec: &SortSpec) -> Result<()> {
    let count = spec.groups.len();

    for (field, index) in [
        ("outsiders_group", spec.outsiders_group),
        ("outsiders_files_group", spec.outsiders_files_group),
        ("outsiders_folders_group", spec.outsiders_folders_group),
    ] {
        if let Some(index) = index {
            check_index(field, index, count)?;
        }
    }

    if let Some(order) = &spec.priority_order {
        let mut seen = vec![false; count];
        for &index in order {
            check_index("priority_order", index, count)?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(SpecError::DuplicatePriority(index));
            }
        }
    }

    for (idx, group) in spec.groups.iter().enumerate() {
        if let Some(target) = group.combine_with {
            check_index("combine_with", target, count)?;
        }
        if group.files_only && group.folders_only {
            return Err(SpecError::ContradictoryFilters(idx));
        }
        if matches!(group.kind, GroupKind::HasMetadataField)
            && group.with_metadata_field.is_none()
        {
            return Err(SpecError::MissingMetadataField(idx));
        }
    }

    Ok(())
}
