//! Command catalog
//!
//! The fixed set of MPD verbs this client knows about, each with the
//! argument names it documents. Argument lists are informational only: any
//! positional argument list is accepted and the server decides validity.

use std::fmt;

use crate::error::{MpdError, Result};

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name as sent on the wire
    pub name: &'static str,

    /// Documented argument slots, `None` for commands taking no arguments
    pub args: Option<&'static [&'static str]>,
}

impl CommandSpec {
    const fn new(name: &'static str, args: Option<&'static [&'static str]>) -> Self {
        Self { name, args }
    }

    /// Human readable argument documentation
    pub fn usage(&self) -> String {
        match self.args {
            None => "Command's Arguments: none".to_string(),
            Some(args) => format!("Command's Arguments: ({})", args.join(", ")),
        }
    }

    /// Number of documented argument slots
    pub fn arity(&self) -> usize {
        self.args.map_or(0, <[_]>::len)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.args {
            None => write!(f, "{}", self.name),
            Some(args) => write!(f, "{} <{}>", self.name, args.join("> <")),
        }
    }
}

macro_rules! catalog {
    (@args None) => { None };
    (@args [ $($arg:literal),* ]) => { Some(&[ $($arg),* ] as &[&str]) };
    ($( $name:literal => $args:tt ),* $(,)?) => {
        &[ $( CommandSpec::new($name, catalog!(@args $args)) ),* ]
    };
}

/// Every supported command, grouped as in the MPD command reference
static COMMANDS: &[CommandSpec] = catalog! {
    // Querying MPD's status
    "clearerror" => None,
    "currentsong" => None,
    "idle" => ["subsystems"],
    "status" => None,
    "stats" => None,

    // Playback options
    "consume" => ["state"],
    "crossfade" => ["seconds"],
    "mixrampdb" => ["decibels"],
    "mixrampdelay" => ["seconds"],
    "random" => ["state"],
    "repeat" => ["state"],
    "setvol" => ["vol"],
    "single" => ["state"],
    "replay_gain_mode" => ["mode"],
    "replay_gain_status" => None,
    "volume" => ["change"], // deprecated

    // Controlling playback
    "next" => None,
    "pause" => ["pause"], // omitting the argument is deprecated
    "play" => ["songpos"],
    "playid" => ["songid"],
    "previous" => None,
    "seek" => ["songpos", "time"],
    "seekid" => ["songid", "time"],
    "seekcur" => ["time"],
    "stop" => None,

    // The current playlist
    "add" => ["uri"],
    "addid" => ["uri", "position"],
    "clear" => None,
    "delete" => ["pos", "start_end"],
    "deleteid" => ["songid"],
    "move" => ["from", "start_end", "to"],
    "moveid" => ["from", "to"],
    "playlist" => None, // use playlistinfo instead
    "playlistfind" => ["tag", "needle"],
    "playlistid" => ["songid"],
    "playlistinfo" => ["songpos", "start_end"],
    "playlistsearch" => ["tag", "needle"],
    "plchanges" => ["version"],
    "plchangeposid" => ["version"],
    "prio" => ["priority", "start_end"],
    "prioid" => ["priority", "id"],
    "rangeid" => ["id", "start_end"],
    "shuffle" => ["start_end"],
    "swap" => ["song1", "song2"],
    "swapid" => ["song1", "song2"],
    "addtagid" => ["songid", "tag", "value"],
    "cleartagid" => ["songid", "tag"],

    // Stored playlists
    "listplaylist" => ["name"],
    "listplaylistinfo" => ["name"],
    "listplaylists" => None,
    "load" => ["name", "start_end"],
    "playlistadd" => ["name", "uri"],
    "playlistclear" => ["name"],
    "playlistdelete" => ["name", "songpos"],
    "playlistmove" => ["name", "songid", "songpos"],
    "rename" => ["name", "new_name"],
    "rm" => ["name"],
    "save" => ["name"],

    // The music database
    "count" => ["tag", "needle", "group", "grouptype"],
    "find" => ["type", "what"],
    "findadd" => ["type", "what"],
    "list" => ["type", "filtertype", "filterwhat", "group", "grouptype"],
    "listall" => ["uri"],
    "listallinfo" => ["uri"],
    "listfiles" => ["uri"],
    "lsinfo" => ["uri"],
    "readcomments" => ["uri"],
    "search" => ["type", "what"],
    "searchadd" => ["type", "what"],
    "searchaddpl" => ["name", "type", "what"],
    "searcgaddpl" => ["name", "type", "what"], // historical misspelling, kept for callers
    "update" => ["uri"],
    "rescan" => ["uri"],

    // Mounts and neighbors
    "mount" => ["path", "uri"],
    "unmount" => ["path"],
    "listmounts" => None,
    "listneighbors" => None,

    // Stickers (get/set/delete/list/find in one verb)
    "sticker" => ["cmd", "type", "uri", "name", "value"],

    // Connection settings
    "close" => None,
    "kill" => None,
    "password" => ["password"],
    "ping" => None,

    // Audio output devices
    "disableoutput" => ["id"],
    "enableoutput" => ["id"],
    "toggleoutput" => ["id"],
    "outputs" => None,

    // Reflection
    "config" => None,
    "commands" => None,
    "notcommands" => None,
    "tagtypes" => None,
    "urlhandlers" => None,
    "decoders" => None,

    // Client to client
    "subscribe" => ["name"],
    "unsubscribe" => ["name"],
    "channels" => None,
    "readmessages" => None,
    "sendmessages" => ["channel", "text"],
};

/// Look up a command by name
pub fn lookup(name: &str) -> Result<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| MpdError::UnknownCommand(name.to_string()))
}

/// Whether `name` is in the catalog
pub fn is_known(name: &str) -> bool {
    COMMANDS.iter().any(|spec| spec.name == name)
}

/// Iterate the catalog in declaration order
pub fn commands() -> impl Iterator<Item = &'static CommandSpec> {
    COMMANDS.iter()
}
