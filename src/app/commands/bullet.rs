use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "bullet",
    label: "Bulletpoint",
    icon: "•",
    description: "Create a bulleted list item",
    action: CommandAction::Insert("- "),
};
