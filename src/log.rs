use std::fmt;

use backtrace::{BacktraceFmt, PrintFmt};

macro_rules! error {
	(fatal: $fmt:literal $(, $($tt:tt)*)?) => {{
		::log::error!(target: "gl-dispatch", concat!($fmt, "\n{:#?}") $(, $($tt)*)?, $crate::log::CurrentBacktrace);
		::std::panic!(concat!("gl-dispatch: ", $fmt) $(, $($tt)*)?);
	}};
	($fmt:literal $(, $($tt:tt)*)?) => {
		::log::error!(target: "gl-dispatch", concat!($fmt, "\n{:#?}") $(, $($tt)*)?, $crate::log::CurrentBacktrace);
	};
}

macro_rules! warning {
	($($tt:tt)+) => {
		::log::warn!(target: "gl-dispatch", $($tt)+);
	}
}

macro_rules! debug {
	($($tt:tt)+) => {
		::log::debug!(target: "gl-dispatch", $($tt)+);
	}
}

macro_rules! trace {
	($($tt:tt)+) => {
		::log::trace!(target: "gl-dispatch", $($tt)+);
	}
}

pub(crate) use debug;
pub(crate) use error;
pub(crate) use trace;
pub(crate) use warning;

/// Backtrace of the code that called into gl-dispatch, with the crate's own
/// frames and the test runner's frames cut off
pub(crate) struct CurrentBacktrace;

impl fmt::Debug for CurrentBacktrace {
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut pp = move |fmt: &mut fmt::Formatter<'_>, path: backtrace::BytesOrWideString<'_>| {
			let path = path.into_path_buf();
			fmt::Display::fmt(&path.display(), fmt)
		};
		let mut f = BacktraceFmt::new(fmt, PrintFmt::Short, &mut pp);

		f.add_context()?;

		let bt = backtrace::Backtrace::new();
		let mut frames = bt.frames().to_vec();

		let last_crate_frame = frames.iter().enumerate().rev().find_map(|(i, frame)| {
			for symbol in frame.symbols().iter() {
				if let Some(name) = symbol.name() {
					let name = format!("{}", name);
					if name.starts_with("gl_dispatch") || name.starts_with("<gl_dispatch") {
						return Some(i)
					}
				}
			}
			None
		});
		if let Some(frame) = last_crate_frame {
			frames.drain(..=frame);
		}

		let short_bt_frame = frames.iter().enumerate().find_map(|(i, frame)| {
			for symbol in frame.symbols().iter() {
				if let Some(name) = symbol.name() {
					let name = format!("{}", name);
					if name.contains("__rust_begin_short_backtrace") {
						return Some(i)
					}
				}
			}
			None
		});
		if let Some(frame) = short_bt_frame {
			frames.drain(frame..);
		}

		for frame in frames {
			f.frame().backtrace_frame(&frame)?;
		}

		f.finish()?;
		Ok(())
	}
}
