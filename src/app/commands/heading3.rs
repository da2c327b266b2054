use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    id: "heading-3",
    label: "Heading 3",
    icon: "###",
    description: "Small section heading",
    action: CommandAction::Insert("### "),
};
