use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Assign teaching load to professors through a max-flow network.
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(group(ArgGroup::new("records").args(["professors", "random"])))]
pub struct Args {
    /// Professor records, one `id,maxLoad,minLoad,course,...` per line
    #[arg(long)]
    pub professors: Option<PathBuf>,

    /// Generate professors from this seed instead of reading a file
    #[arg(long, conflicts_with = "professors")]
    pub random: Option<u64>,

    /// Number of generated professors (defaults to two more than courses)
    #[arg(long, requires = "random")]
    pub professor_count: Option<usize>,

    /// Course ids for file and generated records (default 1..=25); the
    /// built-in sample has its own courses
    #[arg(long, value_delimiter = ',', requires = "records")]
    pub courses: Option<Vec<u32>>,

    /// Rebuild and re-solve this many times
    #[arg(long, default_value_t = 10)]
    pub runs: usize,

    /// Seed for the augmenting-path tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Interactive dashboard instead of the plain report
    #[arg(long)]
    pub tui: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_course_list() {
        let args = Args::try_parse_from([
            "courseflow",
            "--random",
            "2",
            "--courses",
            "3,5,8",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(Some(vec![3, 5, 8]), args.courses);
        assert_eq!(Some(7), args.seed);
        assert_eq!(10, args.runs);
        assert!(!args.tui);
    }

    #[test]
    fn test_sources_are_exclusive() {
        assert!(Args::try_parse_from(["courseflow", "--professors", "p.csv", "--random", "1"]).is_err());
        assert!(Args::try_parse_from(["courseflow", "--professor-count", "4"]).is_err());
    }

    #[test]
    fn test_courses_need_a_record_source() {
        assert!(Args::try_parse_from(["courseflow", "--courses", "1,2"]).is_err());
        assert!(Args::try_parse_from(["courseflow", "--professors", "p.csv", "--courses", "1,2"]).is_ok());
    }
}
