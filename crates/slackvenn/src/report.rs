//! The console report.

use std::io::{self, Write};

use slackvenn_models::id::{ChannelId, UserId};

use crate::{resolver::NameTable, Comparison};

/// Banner printed before anything is fetched.
pub fn write_header<W: Write>(
    w: &mut W,
    channel_a: &ChannelId,
    channel_b: &ChannelId,
) -> io::Result<()> {
    writeln!(w, "📊 slackVenn: Analyzing channel membership overlap...")?;
    writeln!(w, "🔍 Channel A: {}", channel_a)?;
    writeln!(w, "🔍 Channel B: {}", channel_b)?;
    writeln!(w)
}

pub fn write_report<W: Write>(w: &mut W, comparison: &Comparison) -> io::Result<()> {
    writeln!(w, "📈 Analysis Results:")?;
    writeln!(w, "   Channel A: {} members", comparison.members_a.len())?;
    writeln!(w, "   Channel B: {} members", comparison.members_b.len())?;
    writeln!(w, "   Overlap: {} members", comparison.both.len())?;
    writeln!(w)?;

    write_group(w, "🟢 Users in BOTH channels:", &comparison.both, &comparison.names)?;
    writeln!(w)?;
    write_group(w, "🔵 Users ONLY in Channel A:", &comparison.only_a, &comparison.names)?;
    writeln!(w)?;
    write_group(w, "🟣 Users ONLY in Channel B:", &comparison.only_b, &comparison.names)
}

fn write_group<W: Write>(w: &mut W, title: &str, users: &[UserId], names: &NameTable) -> io::Result<()> {
    writeln!(w, "{}", title)?;
    for user in users {
        writeln!(w, " - {}", names.get(user))?;
    }

    Ok(())
}
