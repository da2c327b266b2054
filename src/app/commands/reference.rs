use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "reference",
    label: "Reference",
    icon: "🔗",
    description: "Insert a hyperlink",
    action: CommandAction::Insert("[title](url)"),
};
