use std::fmt::Write;

use crate::Flag;

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

const ENTRIES_PER_LINE: usize = 3;

pub(crate) fn flag_usage(flags: &[Flag]) -> String {
    let mut buf = String::new();
    for (i, flag) in flags.iter().enumerate() {
        w!(buf, " {}", flag.usage_entry());
        if (i + 1) % ENTRIES_PER_LINE == 0 {
            w!(buf, "\n");
        }
    }
    let buf = buf.strip_prefix(' ').unwrap_or(&buf);
    buf.strip_suffix('\n').unwrap_or(buf).to_string()
}

pub(crate) fn usage(name: &str, flags: &[Flag]) -> String {
    let flags = flag_usage(flags);
    if flags.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, flags)
    }
}

pub(crate) fn help(name: &str, description: &str, flags: &[Flag]) -> String {
    let mut buf = String::new();
    w!(buf, "{}\n", usage(name, flags));

    if !description.is_empty() {
        let indent = " ".repeat(format!("usage: {} ", name).chars().count());
        blank_line(&mut buf);
        w!(buf, "{}{}\n", indent, description);
        blank_line(&mut buf);
    }

    w!(buf, "Arguments:\n");
    for flag in flags {
        let (column, description) = flag.help_entry();
        w!(buf, "  {}  {}\n", column, description);
    }

    buf.trim().to_string()
}

fn blank_line(buf: &mut String) {
    w!(buf, "\n");
}
