//! The emitted configuration format.
//!
//! This module documents the dae-style block configuration language as
//! produced by this library. It contains no code; it is the reference for
//! what the marshaller guarantees about its output.
//!
//! # Overview
//!
//! The format is an indented, block-structured config DSL:
//!
//! ```text
//! global {
//!     tproxy_port: 12345
//!     lan_nat_direct: true
//!     check_interval: '30s'
//! }
//! routing {
//!     domain(geosite:cn) -> direct
//!     fallback: my_group
//! }
//! ```
//!
//! # Core Syntax
//!
//! ## Blocks
//!
//! A section renders as `key {`, an indented body, and a closing `}` on
//! its own line. Indentation is a configurable number of spaces per depth
//! level (default 4, see [`MarshalOptions`](crate::MarshalOptions)); tabs
//! are never emitted.
//!
//! ## Scalar lines
//!
//! A field renders as `key: value`. A field whose mapping is the sentinel
//! `_` renders the bare value with no key, at the same indentation. Per
//! declared type:
//!
//! | Type | Scalar rendering | Array rendering |
//! |------|------------------|-----------------|
//! | `bool` | `true` / `false`, bare | joined with `", "` |
//! | integer widths | decimal, bare | joined with `", "` |
//! | `string`, `time.Duration` | quoted: `'...'` | joined with `", "`, **unquoted** |
//! | `config.FunctionListOrString` | unquoted expression | invalid (error) |
//! | `config.FunctionOrString`, `config_parser.Function` | unquoted expression | joined with `" && "` |
//! | `config_parser.RoutingRule` | unquoted line | one line per element ("squeeze") |
//! | `config.KeyableString` | invalid as scalar | sub-block of keyable lines |
//! | anything else | nested block | repeated named blocks (fan-out) |
//!
//! The string-array asymmetry is deliberate: scalar strings are quoted,
//! string-array joins are not. Array elements are expected to arrive
//! already formatted; callers that need quoted elements pre-format them.
//!
//! ## String literals
//!
//! Single-quote delimited; a literal `'` inside the payload is escaped as
//! `\'`. No other escape sequences are ever produced.
//!
//! ## Keyable strings
//!
//! Subscription/node/DNS-upstream style values carry an optional key
//! prefix. On output each element is split at the first `:` that is not
//! immediately followed by `//` (so a URL's scheme separator never
//! splits), both halves trimmed:
//!
//! ```text
//! subscription {
//!     mysub:'https://test.com/my_sub'
//!     'http://test.com'
//! }
//! ```
//!
//! ## Expressions
//!
//! Boolean conditions compose with `" && "`; routing lines are
//! `conditions -> outbound`. Function calls render as `name(p1, p2)`,
//! except parameterless outbound references, which are bare identifiers.
//! See [`expr`](crate::expr) for the builder functions.
//!
//! # Repetition: the array-of-sections
//!
//! A composite field marked as an array does not carry repeated child
//! nodes. Instead its children's value sequences are **parallel arrays**:
//! index `i` across all children describes the `i`-th repeated block. One
//! child must be named `Name`; its `i`-th value becomes the emitted block
//! key:
//!
//! ```text
//! group {
//!     my_group {
//!         filter: !name(keyword: HK) && subtag(mysub)
//!         policy: min_avg10
//!     }
//! }
//! ```
//!
//! Nested array-of-sections project recursively: each level peels one
//! index off its value sequences, and sibling indices never contaminate
//! each other.
//!
//! # Omission
//!
//! A field whose type is in the outline's leaf-type set and whose value
//! is absent or falsy (`null`, `false`, `0`, empty string) is omitted
//! entirely: it means "not set, use the implicit default". A present
//! value sequence is never falsy, even when empty.
