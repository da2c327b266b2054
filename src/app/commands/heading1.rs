use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "heading-1",
    label: "Heading 1",
    icon: "#",
    description: "Large section heading",
    action: CommandAction::Insert("# "),
};
