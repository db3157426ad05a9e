//! PBS Job Script Rendering
//!
//! Builds the text of one `cuffdiff` job script. Rendering is pure; the
//! generator decides where the text ends up.

use std::path::Path;

use crate::experiment::{Experiment, Group};
use crate::paths::join_clean;

/// Subdirectory of the project root holding job scripts and their logs.
pub const LOG_DIR: &str = "log";

/// Permissions for a newly created log directory.
pub const LOG_DIR_MODE: u32 = 0o774;

/// Alignment output produced for every sample by the upstream aligner.
pub const ALIGNMENT_FILE: &str = "accepted_hits.bam";

/// Scheduler queue every job is submitted to.
pub const PBS_QUEUE: &str = "high";

/// Resource request: one node, one processor.
pub const PBS_RESOURCES: &str = "nodes=1:ppn=1";

/// Jobs may be rerun by the scheduler.
pub const PBS_RERUNNABLE: &str = "y";

/// Name of the directory cuffdiff writes into, relative to the project root.
pub fn output_dir_name(case: &str, control: &str) -> String {
    format!("{}_{}_DEG", case, control)
}

/// File name of the job script for one comparison.
pub fn script_file_name(case: &str, control: &str) -> String {
    format!("batch_DEG_{}_{}.pbs", case, control)
}

/// Scheduler job name, also the stem of the stdout/stderr logs.
pub fn job_name(case: &str, control: &str) -> String {
    format!("DEG_{}_{}", case, control)
}

/// Comma-joined alignment file paths for every sample of `group`, in order.
pub fn alignment_paths(group: &Group, project_root: &str) -> String {
    group
        .samples
        .iter()
        .map(|sample| {
            join_clean(project_root, [sample.as_str(), ALIGNMENT_FILE])
                .display()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders the full job script for `case` against `control`.
///
/// `output_dir` is the absolute directory cuffdiff should write into.
pub fn render_job_script(
    experiment: &Experiment,
    case: &Group,
    control: &Group,
    output_dir: &Path,
    user: &str,
) -> String {
    let root = &experiment.project_root;
    let name = job_name(&case.name, &control.name);

    let mut script = String::new();
    script.push_str(&format!("#PBS -N {}\n", name));
    script.push_str(&format!("#PBS -o {}/{}/{}.out\n", root, LOG_DIR, name));
    script.push_str(&format!("#PBS -e {}/{}/{}.err\n", root, LOG_DIR, name));
    script.push_str(&format!("#PBS -l {}\n", PBS_RESOURCES));
    script.push_str(&format!("#PBS -q {}\n", PBS_QUEUE));
    script.push_str(&format!("#PBS -r {}\n", PBS_RERUNNABLE));
    script.push_str(&format!("#PBS -u {}\n", user));
    script.push('\n');
    script.push_str(&format!(
        "{} --no-update-check -o {} -b {} -u {} {} {}\n",
        experiment.cuffdiff_exec,
        output_dir.display(),
        experiment.genome_btw_idx,
        experiment.tranx_btw_idx,
        alignment_paths(case, root),
        alignment_paths(control, root),
    ));

    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn experiment() -> Experiment {
        Experiment {
            project_root: "/home/sam/GoTest".to_string(),
            groups: vec![Group::new("A", ["s1", "s2"]), Group::new("B", ["s3"])],
            cuffdiff_exec: "/online/software/cuffdiff".to_string(),
            genome_btw_idx: "/online/genome/hg19".to_string(),
            gtf_path: "/online/genome/hg19.gtf".to_string(),
            tranx_btw_idx: "/online/genome/hg19_tranx".to_string(),
            ..Experiment::default()
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(output_dir_name("A", "B"), "A_B_DEG");
        assert_eq!(script_file_name("A", "B"), "batch_DEG_A_B.pbs");
        assert_eq!(job_name("A", "B"), "DEG_A_B");
    }

    #[test]
    fn test_alignment_paths_keep_sample_order() {
        let group = Group::new("C", ["s5", "s4"]);
        assert_eq!(
            alignment_paths(&group, "/data/"),
            "/data/s5/accepted_hits.bam,/data/s4/accepted_hits.bam"
        );
    }

    #[test]
    fn test_alignment_paths_rooted_sample_id() {
        let group = Group::new("A", ["/s1", "s2"]);
        assert_eq!(
            alignment_paths(&group, "/proj"),
            "/proj/s1/accepted_hits.bam,/proj/s2/accepted_hits.bam"
        );
    }

    #[test]
    fn test_alignment_paths_empty_group() {
        let group = Group::new("E", Vec::<String>::new());
        assert_eq!(alignment_paths(&group, "/data"), "");
    }

    #[test]
    fn test_render_job_script_exact() {
        let experiment = experiment();
        let script = render_job_script(
            &experiment,
            &experiment.groups[0],
            &experiment.groups[1],
            &PathBuf::from("/home/sam/GoTest/A_B_DEG"),
            "sam",
        );

        let expected = "\
#PBS -N DEG_A_B
#PBS -o /home/sam/GoTest/log/DEG_A_B.out
#PBS -e /home/sam/GoTest/log/DEG_A_B.err
#PBS -l nodes=1:ppn=1
#PBS -q high
#PBS -r y
#PBS -u sam

/online/software/cuffdiff --no-update-check -o /home/sam/GoTest/A_B_DEG -b /online/genome/hg19 -u /online/genome/hg19_tranx /home/sam/GoTest/s1/accepted_hits.bam,/home/sam/GoTest/s2/accepted_hits.bam /home/sam/GoTest/s3/accepted_hits.bam
";
        assert_eq!(script, expected);
    }

    #[test]
    fn test_render_directive_count() {
        let experiment = experiment();
        let script = render_job_script(
            &experiment,
            &experiment.groups[1],
            &experiment.groups[0],
            &PathBuf::from("/out"),
            "u",
        );

        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines.iter().filter(|l| l.starts_with("#PBS ")).count(), 7);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[7], "");
        assert!(lines[8].starts_with("/online/software/cuffdiff --no-update-check -o /out "));
    }
}
