#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CommandId {
    Help,
    NewRound,
    Again,
    Setup,
    AddPlayer,
    RemovePlayer,
    RenamePlayer,
    Holes,
    Par,
    Preset,
    Course,
    Stroke,
    Card,
    EndRound,
    Summary,
    History,
    Theme,
    Settings,
    Reset,
    Exit,
}

pub(crate) struct ReplCommand {
    pub(crate) id: CommandId,
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) description: &'static str,
    pub(crate) aliases: &'static [&'static str],
}

pub(crate) const REPL_COMMANDS: &[ReplCommand] = &[
    ReplCommand {
        id: CommandId::Help,
        name: "help",
        usage: "",
        description: "Show this help.",
        aliases: &["?", "-h", "--help"],
    },
    ReplCommand {
        id: CommandId::NewRound,
        name: "new",
        usage: "",
        description: "Start a new 18-hole round with the default course.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Again,
        name: "again",
        usage: "",
        description: "New round with the same course, holes and players.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Setup,
        name: "setup",
        usage: "",
        description: "Show course and roster.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::AddPlayer,
        name: "add",
        usage: "",
        description: "Add a player (up to 6).",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::RemovePlayer,
        name: "remove",
        usage: "<player>",
        description: "Remove a player.",
        aliases: &["rm"],
    },
    ReplCommand {
        id: CommandId::RenamePlayer,
        name: "rename",
        usage: "<player> <name>",
        description: "Rename a player.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Holes,
        name: "holes",
        usage: "<9|18>",
        description: "Switch between 9 and 18 holes.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Par,
        name: "par",
        usage: "<hole> <+|->",
        description: "Raise or lower a hole's par (3-5).",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Preset,
        name: "preset",
        usage: "<standard18|standard9>",
        description: "Reset all pars to a standard layout.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Course,
        name: "course",
        usage: "<name|rating|slope> <value>",
        description: "Set course name, rating (67-77) or slope (55-155).",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Stroke,
        name: "stroke",
        usage: "<player> <hole> [strokes]",
        description: "Record strokes for a hole; leave blank to clear.",
        aliases: &["s"],
    },
    ReplCommand {
        id: CommandId::Card,
        name: "card",
        usage: "[player]",
        description: "Show the scorecard, or one player's holes.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::EndRound,
        name: "end",
        usage: "",
        description: "Finish the round once every hole is entered.",
        aliases: &["finish"],
    },
    ReplCommand {
        id: CommandId::Summary,
        name: "summary",
        usage: "",
        description: "Show the last finished round.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::History,
        name: "history",
        usage: "",
        description: "List finished rounds.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Theme,
        name: "theme",
        usage: "<light|dark>",
        description: "Set the display theme.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Settings,
        name: "settings",
        usage: "",
        description: "Show settings.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Reset,
        name: "reset",
        usage: "",
        description: "Erase all saved data on this device.",
        aliases: &[],
    },
    ReplCommand {
        id: CommandId::Exit,
        name: "exit",
        usage: "",
        description: "Leave; the round in progress is kept.",
        aliases: &["quit"],
    },
];

pub(crate) fn find_command(name: &str) -> Option<&'static ReplCommand> {
    REPL_COMMANDS
        .iter()
        .find(|command| command.name == name || command.aliases.contains(&name))
}

pub(crate) fn build_repl_help() -> String {
    let mut help = String::from("Commands:");
    for command in REPL_COMMANDS {
        let mut names = command.name.to_string();
        if !command.usage.is_empty() {
            names.push(' ');
            names.push_str(command.usage);
        }
        help.push_str("\n  ");
        help.push_str(&names);
        let padding = 34usize.saturating_sub(names.len());
        help.push_str(&" ".repeat(padding.max(2)));
        help.push_str(command.description);
    }
    help
}
