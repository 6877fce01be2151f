//! Chat reply rendering for the chatdown toolchain
//!
//!     This crate turns the small Markdown subset used in chat replies into
//!     HTML fragments ready to drop into a message container: headings sized
//!     with inline styles, bold and italic spans, bullet and numbered items,
//!     inline code, links that open in a new tab, and `<br>` line breaks.
//!
//!     This is a pure lib, that is, it powers the chatdown CLI but is shell
//!     agnostic: no code here supposes a shell environment, be it std print,
//!     env vars, exit codes etc.
//!
//! Architecture
//!
//!     The renderer is not a parser. It is an ordered list of substitution
//!     rules (./rules.rs) applied one after another by a small driver
//!     (./renderer.rs): each stage rewrites the full output of the previous
//!     stage, and a final assembly stage turns the line structure into <br>
//!     terminators. There is no document tree at any point, which keeps the
//!     pipeline trivially total: rendering never fails, and anything the
//!     rules do not recognize passes through verbatim.
//!
//!     The file structure:
//!     .
//!     ├── lib.rs
//!     ├── rules.rs        # FormatRule, RuleScope and the ordered table
//!     └── renderer.rs     # render / render_with, escaping, line assembly
//!
//! Rendering Model
//!
//!     Because stages are sequential, constructs interact in ways a grammar
//!     would not allow, and that interleaving is part of the contract:
//!
//!     - Bold runs before italic, so `***x***` renders as `<b><i>x</b></i>`
//!       with crosswise nesting. Well formed, no; stable, yes.
//!     - Bullets run before numbered items, so `1. - x` ends up as a plain
//!       dash line while `- 1. x` keeps its ordinal inside the bullet.
//!     - Code and links run last and happily wrap markup the earlier stages
//!       produced.
//!
//!     Heading and list rules are line scoped: anchored patterns matched
//!     against each line independently, every qualifying line rewritten.
//!     The emphasis, code and link rules are text scoped, non-greedy, and
//!     never cross a line boundary.
//!
//! Security
//!
//!     By default the fragment is built from the reply exactly as received.
//!     HTML-significant characters in the reply become live markup, which is
//!     only acceptable when the producer is trusted. For anything else, set
//!     [`RenderOptions::escape_input`] to escape the reply before the rules
//!     run; markup injected by the rules themselves stays live.
//!
//! Library Choices
//!
//!     The rules are plain `regex` patterns compiled once behind
//!     `once_cell::sync::Lazy`. Options derive serde traits so the config
//!     layer can deserialize them straight out of TOML. Nothing else is
//!     needed; a real Markdown engine would be wrong here, since the whole
//!     point is reproducing the substitution behavior bit for bit.

pub mod renderer;
pub mod rules;

pub use renderer::{render, render_with, RenderOptions};
pub use rules::{FormatRule, RuleScope};
