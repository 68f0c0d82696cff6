//! Command-line arguments shared by the `tinylife` and `arraylife` binaries.

use std::{fs::File, path::PathBuf};
use tinylife::{ca_formats::rle::Rle, Error, GridWorld, PackedWorld, PlayConfig};

/// Where the initial pattern comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    Literal(PackedWorld),
    RleFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    /// Side length of the grid. `None` for a packed world.
    pub size: Option<usize>,
    pub source: Source,
    pub config: PlayConfig,
}

impl Args {
    /// `<literal> | --rle <path>`, then `[--limit N]`.
    pub fn parse_packed<I: IntoIterator<Item = String>>(args: I) -> Result<Self, Error> {
        Self::parse(args.into_iter(), false)
    }

    /// `<size> <literal> | <size> --rle <path>`, then `[--limit N]`.
    pub fn parse_grid<I: IntoIterator<Item = String>>(args: I) -> Result<Self, Error> {
        Self::parse(args.into_iter(), true)
    }

    fn parse<I: Iterator<Item = String>>(mut args: I, with_size: bool) -> Result<Self, Error> {
        let size = if with_size {
            let arg = args.next().ok_or(Error::MissingArgument("size"))?;
            match arg.parse::<usize>() {
                Ok(size) if size > 0 => Some(size),
                _ => return Err(Error::InvalidSize(arg)),
            }
        } else {
            None
        };

        let source = match args.next().as_deref() {
            None => return Err(Error::MissingArgument("pattern")),
            Some("--rle") => Source::RleFile(
                args.next()
                    .ok_or(Error::MissingArgument("RLE file path"))?
                    .into(),
            ),
            Some(literal) => Source::Literal(literal.parse()?),
        };

        let mut config = PlayConfig::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--limit" => {
                    let limit = args.next().ok_or(Error::MissingArgument("limit"))?;
                    config.generation_limit =
                        Some(limit.parse().map_err(|_| Error::InvalidLimit(limit))?);
                }
                _ => return Err(Error::UnknownArgument(arg)),
            }
        }

        Ok(Args {
            size,
            source,
            config,
        })
    }

    pub fn load_packed(&self) -> Result<PackedWorld, Error> {
        match &self.source {
            Source::Literal(world) => Ok(*world),
            Source::RleFile(path) => {
                PackedWorld::from_rle(Rle::new_from_file(File::open(path)?)?)
            }
        }
    }

    /// An empty `size` by `size` grid holding the pattern: a literal is
    /// centred, an RLE pattern starts at the top left corner.
    pub fn load_grid(&self) -> Result<GridWorld, Error> {
        let size = self.size.unwrap_or(8);
        match &self.source {
            Source::Literal(world) => Ok(GridWorld::embed(size, *world)),
            Source::RleFile(path) => {
                GridWorld::from_rle(Rle::new_from_file(File::open(path)?)?, size, size)
            }
        }
    }
}
