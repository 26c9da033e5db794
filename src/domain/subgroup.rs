// SPDX-License-Identifier: MPL-2.0
//! Subgroups partition the keys of one language document.

use super::named_enum;

named_enum! {
    /// A named partition of localization keys (e.g. dialogue vs. UI labels).
    pub enum Subgroup {
        Text,
        Sizes,
        Dialogue,
        Examples,
        Credits,
        CharacterNames,
        StageNames,
        ObjectiveText,
        EmailMessages,
        Notifications,
        SkinText,
    }
}
