/// Immutable registry entry. The list order in `all_commands` is both the
/// display order and the keyboard navigation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub action: CommandAction,
}

/// The text transform a command applies to its target block.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandAction {
    /// Replace the line up to the caret with this text.
    Insert(&'static str),
    /// Same, but the insertion spans several blocks; the text after the
    /// caret reflows onto the last one.
    InsertBlocks(&'static [&'static str]),
}
