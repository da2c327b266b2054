use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "toggle",
    label: "Toggle",
    icon: "›",
    description: "Create a collapsible section",
    action: CommandAction::InsertBlocks(&["› Toggle", "  "]),
};
