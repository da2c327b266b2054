use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "heading-2",
    label: "Heading 2",
    icon: "##",
    description: "Medium section heading",
    action: CommandAction::Insert("## "),
};
