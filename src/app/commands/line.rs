use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "line",
    label: "Line",
    icon: "—",
    description: "Insert a horizontal rule",
    action: CommandAction::Insert("---"),
};
