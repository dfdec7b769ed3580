//! Shared code for the pathstar demo binary: option parsing and the search
//! report.

use std::fmt::{self, Display};
use std::path::PathBuf;

use pathstar::{
    Distance, Heuristic, Pathfinder, Simple, WithGrandparent, as_the_crow_flies, chebyshev,
    manhattan, straight_line,
};
use pathstar_grid::{AsciiMap, Movement, Point};

/// Maze used when no map file is given.
pub const DEFAULT_MAZE: &str = "\
S.....#.........
.####.#.#######.
.#....#.#.....#.
.#.####.#.###.#.
.#......#...#.#.
.########.#.#.#.
......99#.#.#...
.####.#.#.#.###.
......#...#....G";

/// Heuristic selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicChoice {
    None,
    #[default]
    Manhattan,
    Chebyshev,
    Crow,
    Straight,
}

impl HeuristicChoice {
    fn parse(s: &str) -> Result<Self, UsageError> {
        match s {
            "none" => Ok(Self::None),
            "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            "crow" => Ok(Self::Crow),
            "straight" => Ok(Self::Straight),
            other => Err(UsageError::UnknownHeuristic(other.to_string())),
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub map: Option<PathBuf>,
    pub heuristic: HeuristicChoice,
    pub octile: bool,
}

impl Options {
    /// Parse arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            if arg == "--heuristic" || arg == "-H" {
                let value = args.next().ok_or(UsageError::MissingValue("--heuristic"))?;
                opts.heuristic = HeuristicChoice::parse(&value)?;
            } else if arg == "--octile" {
                opts.octile = true;
            } else if arg.starts_with('-') {
                return Err(UsageError::UnknownFlag(arg));
            } else if opts.map.is_some() {
                return Err(UsageError::ExtraArgument(arg));
            } else {
                opts.map = Some(PathBuf::from(arg));
            }
        }
        Ok(opts)
    }
}

/// Bad command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    UnknownFlag(String),
    UnknownHeuristic(String),
    MissingValue(&'static str),
    ExtraArgument(String),
    /// The map has no `S` or no `G` marker.
    MissingMarker(char),
}

impl Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFlag(s) => write!(f, "unknown flag {s}"),
            Self::UnknownHeuristic(s) => write!(
                f,
                "unknown heuristic {s} (expected none, manhattan, chebyshev, crow or straight)"
            ),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::ExtraArgument(s) => write!(f, "unexpected argument {s}"),
            Self::MissingMarker(m) => write!(f, "map has no {m} marker"),
        }
    }
}

impl std::error::Error for UsageError {}

/// Search `map` from its `S` to its `G` marker and describe the outcome.
pub fn run(map: &AsciiMap, heuristic: HeuristicChoice) -> Result<String, UsageError> {
    let start = map.start().ok_or(UsageError::MissingMarker('S'))?;
    let goal = map.goal().ok_or(UsageError::MissingMarker('G'))?;
    let finder = Pathfinder::new(map);
    let report = match heuristic {
        HeuristicChoice::None => report::<i32, _>(map, &finder, start, goal),
        HeuristicChoice::Manhattan => report::<i32, _>(
            map,
            &finder.with_heuristic(Simple::new(|n: &Point, g: &Point| manhattan::<i32, _>(n, g))),
            start,
            goal,
        ),
        HeuristicChoice::Chebyshev => report::<i32, _>(
            map,
            &finder.with_heuristic(Simple::new(|n: &Point, g: &Point| chebyshev::<i32, _>(n, g))),
            start,
            goal,
        ),
        HeuristicChoice::Crow => report::<f64, _>(
            map,
            &finder.with_heuristic(Simple::new(|n: &Point, g: &Point| {
                as_the_crow_flies::<i32, _>(n, g)
            })),
            start,
            goal,
        ),
        HeuristicChoice::Straight => report::<i32, _>(
            map,
            &finder.with_heuristic(WithGrandparent::new(
                |n: &Point, _s: &Point, g: &Point, _p: &Point, gp: Option<&Point>| {
                    manhattan::<i32, _>(n, g) * straight_line::<i32, _>(2, n, gp)
                },
            )),
            start,
            goal,
        ),
    };
    Ok(report)
}

fn report<D, H>(map: &AsciiMap, finder: &Pathfinder<&AsciiMap, H>, start: Point, goal: Point) -> String
where
    D: Distance + From<u8> + Display,
    H: Heuristic<Point, D>,
{
    let mut search = finder.path(start, goal);
    let path: Vec<Point> = search.by_ref().collect();
    match search.cost() {
        Some(cost) => format!(
            "{}\n\n{} steps, cost {}, {} expansions",
            map.render(&path),
            path.len().saturating_sub(1),
            cost,
            search.expanded(),
        ),
        None => format!(
            "{}\n\nno path ({} expansions)",
            map.render(&[]),
            search.expanded()
        ),
    }
}

/// Apply the movement flag of `opts` to a parsed map.
pub fn configure(map: AsciiMap, opts: &Options) -> AsciiMap {
    if opts.octile {
        map.with_movement(Movement::Octile)
    } else {
        map
    }
}
