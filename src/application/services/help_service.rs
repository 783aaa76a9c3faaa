use crate::domain::entities::{Action, CommandDefinition};

/// Actions listed in the help text, in display order
const ACTIONS: &[(Action, &str)] = &[
    (Action::Start, "Start an MS Teams meeting."),
    (Action::Disconnect, "Disconnect from Mattermost"),
    (Action::Help, "Show this help text."),
];

/// Header line every help response starts with
pub fn help_header(definition: &CommandDefinition) -> String {
    format!("###### Mattermost {} Plugin - Slash Command Help", definition.display_name)
}

/// Full help text for the command
pub fn help_text(definition: &CommandDefinition) -> String {
    let mut help = help_header(definition);
    for (action, description) in ACTIONS {
        help.push_str(&format!("\n* `{} {}` - {}", definition.invocation(), action.as_str(), description));
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_action() {
        let def = CommandDefinition::new("mstmeetings").with_display_name("MS Teams Meetings");
        let help = help_text(&def);

        assert!(help.starts_with("###### Mattermost MS Teams Meetings Plugin - Slash Command Help\n"));
        assert!(help.contains("* `/mstmeetings start` - Start an MS Teams meeting."));
        assert!(help.contains("* `/mstmeetings disconnect` - Disconnect from Mattermost"));
        assert!(help.contains("* `/mstmeetings help`"));
    }

    #[test]
    fn test_help_follows_trigger() {
        let def = CommandDefinition::new("teams").with_display_name("Teams");
        assert!(help_text(&def).contains("`/teams start`"));
    }
}
