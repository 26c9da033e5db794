// SPDX-License-Identifier: MPL-2.0
//! Logical font types requested by UI code.

use super::named_enum;

named_enum! {
    /// A logical font type; each resolves to a set of language-tagged variants.
    pub enum FontType {
        CharacterNameText,
        CreditsNameText,
        CreditsTitleText,
        DefaultText,
        DefaultTextBold,
        DefaultTextHighlight,
        DefaultTextThin,
        DottedText,
        FlavorText,
        GameplayHudCrewText,
        GameplayHudGraffitiText,
        GameplayHudHeaderText,
        GameplayHudLocalizedGraffitiText,
        GameplayHudStatusText,
        LoadingText,
        MainButtonText,
        MainButtonTextBackdrop,
        MainButtonTextHighlight,
        MainButtonTextPressed,
        MenuTimelineSelectedText,
        MenuTimelineText,
        MenuTitlesText,
        MicroBoyText,
        MicroBoyTextWithoutOutline,
        MicroBoyTitle,
        MicroBoyTitleWithoutOutline,
        PhoneClockText,
        PhoneFortuneText,
        PhoneGraffitiSizeText,
        PhoneLocalizedNotifications,
        PhoneMainText,
        PhoneMessageText,
        PhoneMsgSubjectText,
        PhoneNotificationText,
        PhoneOnScreenNotificationText,
        PhoneSubtext,
        YesNoButtonBackdropText,
        YesNoButtonText,
    }
}
