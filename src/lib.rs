#![doc = r#"
sheetnorm — normalize sprite sheets to a square frame grid.

Every input sheet is decoded, converted to RGBA (opaque alpha is synthesized for
sources without one), resized with a Lanczos3 filter to exactly
`frame_size * grid_size` pixels on each side, and written under its original
base name into an output directory. The defaults are three bird sheets in
`assets/`, 40 px frames on a 4x4 grid (160x160), and `normalized_sheets/`.

Quick start: normalize the default batch
----------------------------------------
```rust,no_run
use sheetnorm::{normalize_sheets, NormalizeParams};

fn main() -> sheetnorm::Result<()> {
    let params = NormalizeParams::default();
    normalize_sheets(&params, |sheet| println!("{sheet}"))?;
    Ok(())
}
```

Normalize in memory
-------------------
```rust,no_run
use std::path::Path;
use sheetnorm::{normalize_sheet_to_buffer, NormalizeParams, ResampleFilter};

fn main() -> sheetnorm::Result<()> {
    let params = NormalizeParams {
        frame_size: 32,
        grid_size: 8,
        filter: ResampleFilter::CatmullRom,
        ..NormalizeParams::default()
    };
    let sheet = normalize_sheet_to_buffer(Path::new("assets/hero.png"), &params)?;
    assert_eq!(sheet.dimensions(), (256, 256));
    Ok(())
}
```

Error handling
--------------
All public functions return `sheetnorm::Result<T>`. A batch stops at the first
error; match on `sheetnorm::Error` to tell decode failures from the rest.

```rust,no_run
use sheetnorm::{normalize_sheets, Error, NormalizeParams};

fn main() {
    match normalize_sheets(&NormalizeParams::default(), |_| {}) {
        Ok(report) => println!("{} sheets", report.sheets.len()),
        Err(Error::Decode { path, source }) => eprintln!("cannot read {}: {source}", path.display()),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, RGBA conversion, exact resize, single-sheet pipeline.
- [`io`] — image reader and sheet writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::NormalizeParams;
pub use error::{Error, Result};
pub use types::{BatchReport, ResampleFilter, SheetReport};

pub use api::{normalize_sheet, normalize_sheet_to_buffer, normalize_sheets, output_path_for};
