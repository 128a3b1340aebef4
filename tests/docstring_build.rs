//! Integration tests for component docstring builds.
//!
//! A fake renderer stands in for doxy2swig so the aggregation and the
//! failure policy can be checked without the external tool.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use doxy_docstrings::build::{fragment_dir, output_file};
use doxy_docstrings::{
    build_docstrings, DocRenderer, DocstringBuilder, DocstringError, FailurePolicy, Result,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Renders `%feature("docstring")` lines from the XML file content,
/// failing on files whose content is `<broken/>`.
struct FeatureRenderer;

impl DocRenderer for FeatureRenderer {
    fn render(&self, input: &Path, output: &Path) -> Result<()> {
        let content = fs::read_to_string(input)?;
        if content.trim() == "<broken/>" {
            return Err(DocstringError::Conversion {
                input: input.to_path_buf(),
                reason: "malformed XML".to_string(),
            });
        }
        let name = input.file_stem().unwrap().to_string_lossy();
        fs::write(
            output,
            format!("%feature(\"docstring\") {} \"{}\";\n", name, content.trim()),
        )?;
        Ok(())
    }
}

/// Project layout: Doxyfile, doc/xml/ with the given files, and swig/.
struct Project {
    dir: TempDir,
}

impl Project {
    fn new(case_sense: &str, xml_files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let xml_dir = dir.path().join("doc").join("xml");
        fs::create_dir_all(&xml_dir).unwrap();
        for (name, content) in xml_files {
            fs::write(xml_dir.join(name), content).unwrap();
        }

        let doxyfile = format!(
            "# Doxyfile for tests\n\
             PROJECT_NAME = Siconos\n\
             OUTPUT_DIRECTORY = {}\n\
             XML_OUTPUT = xml\n\
             CASE_SENSE_NAMES = {}\n\
             FILE_PATTERNS = *.h \\\n\
             *.hpp\n",
            dir.path().join("doc").display(),
            case_sense
        );
        fs::write(dir.path().join("Doxyfile"), doxyfile).unwrap();

        Self { dir }
    }

    fn doxyfile(&self) -> PathBuf {
        self.dir.path().join("Doxyfile")
    }

    fn swig_dir(&self) -> PathBuf {
        self.dir.path().join("swig")
    }

    fn output(&self, component: &str) -> String {
        fs::read_to_string(output_file(&self.swig_dir(), component)).unwrap()
    }
}

// ============================================================================
// Build Tests
// ============================================================================

mod build {
    use super::*;

    #[test]
    fn test_single_header_end_to_end() {
        let project = Project::new("YES", &[("classKernel.xml", "kernel doc")]);

        let report = DocstringBuilder::new(&FeatureRenderer)
            .build("Kernel.hpp", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();

        let fragment =
            fs::read_to_string(fragment_dir(&project.swig_dir(), "kernel").join("classKernel.i"))
                .unwrap();
        assert_eq!(project.output("kernel"), fragment);
        assert_eq!(fragment, "%feature(\"docstring\") classKernel \"kernel doc\";\n");
        assert_eq!(report.headers, 1);
        assert_eq!(report.xml_files, 1);
        assert_eq!(report.fragments_concatenated, 1);
        assert_eq!(
            report.output_file,
            project.swig_dir().join("kernel-docstrings.i")
        );
    }

    #[test]
    fn test_multiple_headers_sorted_output() {
        let project = Project::new(
            "YES",
            &[
                ("classTimeStepping.xml", "ts"),
                ("structSolverOptions.xml", "so"),
                ("SolverOptions_8h.xml", "so header"),
                ("classUnrelated.xml", "nope"),
            ],
        );

        let report = DocstringBuilder::new(&FeatureRenderer)
            .build(
                "TimeStepping.hpp;SolverOptions.h;TimeStepping.hpp;",
                "numerics",
                project.doxyfile(),
                project.swig_dir(),
            )
            .unwrap();

        assert_eq!(report.headers, 2);
        assert_eq!(report.xml_files, 3);
        assert_eq!(
            project.output("numerics"),
            "%feature(\"docstring\") SolverOptions_8h \"so header\";\n\
             %feature(\"docstring\") classTimeStepping \"ts\";\n\
             %feature(\"docstring\") structSolverOptions \"so\";\n"
        );
    }

    #[test]
    fn test_header_list_input() {
        let project = Project::new("YES", &[("classModel.xml", "model")]);
        let headers = vec!["Model.hpp".to_string()];

        let report = DocstringBuilder::new(&FeatureRenderer)
            .build(headers, "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert_eq!(report.fragments_written, 1);
    }

    #[test]
    fn test_case_insensitive_names() {
        let project = Project::new(
            "NO",
            &[
                ("class_time_stepping.xml", "lower"),
                ("classTimeStepping.xml", "upper"),
            ],
        );

        DocstringBuilder::new(&FeatureRenderer)
            .build("TimeStepping.hpp", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert_eq!(
            project.output("kernel"),
            "%feature(\"docstring\") class_time_stepping \"lower\";\n"
        );
    }

    #[test]
    fn test_no_matches_gives_empty_file() {
        let project = Project::new("YES", &[("classOther.xml", "other")]);

        let report = DocstringBuilder::new(&FeatureRenderer)
            .build("Missing.hpp", "io", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert_eq!(report.xml_files, 0);
        assert_eq!(project.output("io"), "");
    }

    #[test]
    fn test_empty_header_list() {
        let project = Project::new("YES", &[]);

        let report = DocstringBuilder::new(&FeatureRenderer)
            .build("", "control", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert_eq!(report.headers, 0);
        assert_eq!(project.output("control"), "");
    }

    #[test]
    fn test_rebuild_is_identical() {
        let project = Project::new(
            "YES",
            &[("classA.xml", "a"), ("structB.xml", "b"), ("C_8h.xml", "c")],
        );
        let builder = DocstringBuilder::new(&FeatureRenderer);

        builder
            .build("A.h;B.h;C.h", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();
        let first = project.output("kernel");
        builder
            .build("A.h;B.h;C.h", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert_eq!(first, project.output("kernel"));
    }

    #[test]
    fn test_components_use_separate_fragment_dirs() {
        let project = Project::new("YES", &[("classA.xml", "a"), ("classB.xml", "b")]);
        let builder = DocstringBuilder::new(&FeatureRenderer);

        builder
            .build("A.h", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();
        builder
            .build("B.h", "numerics", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert!(project.output("kernel").contains("classA"));
        assert!(!project.output("kernel").contains("classB"));
        assert!(project.output("numerics").contains("classB"));
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_doxyfile() {
        let dir = TempDir::new().unwrap();

        let err = DocstringBuilder::new(&FeatureRenderer)
            .build("A.h", "kernel", dir.path().join("Doxyfile"), dir.path())
            .unwrap_err();

        assert!(matches!(err, DocstringError::Io(_)));
    }

    #[test]
    fn test_missing_required_key() {
        let dir = TempDir::new().unwrap();
        let doxyfile = dir.path().join("Doxyfile");
        fs::write(&doxyfile, "OUTPUT_DIRECTORY = doc\nXML_OUTPUT = xml\n").unwrap();

        let err = DocstringBuilder::new(&FeatureRenderer)
            .build("A.h", "kernel", &doxyfile, dir.path())
            .unwrap_err();

        assert!(matches!(err, DocstringError::MissingKey(ref k) if k == "CASE_SENSE_NAMES"));
    }

    #[test]
    fn test_conversion_failure_aborts_by_default() {
        let project = Project::new("YES", &[("classA.xml", "<broken/>"), ("classB.xml", "b")]);

        let err = DocstringBuilder::new(&FeatureRenderer)
            .build("A.h;B.h", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap_err();

        assert!(matches!(err, DocstringError::Conversion { .. }));
        assert!(!output_file(&project.swig_dir(), "kernel").exists());
    }

    #[test]
    fn test_conversion_failure_skipped() {
        let project = Project::new("YES", &[("classA.xml", "<broken/>"), ("classB.xml", "b")]);

        let report = DocstringBuilder::new(&FeatureRenderer)
            .with_policy(FailurePolicy::Skip)
            .build("A.h;B.h", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert!(report.skipped[0].input.ends_with("classA.xml"));
        assert_eq!(report.fragments_written, 1);
        assert_eq!(
            project.output("kernel"),
            "%feature(\"docstring\") classB \"b\";\n"
        );
    }

    #[test]
    fn test_default_converter_failure_aborts() {
        let project = Project::new("YES", &[("classKernel.xml", "kernel doc")]);
        let fragments = fragment_dir(&project.swig_dir(), "kernel");

        let err = build_docstrings("Kernel.hpp", "kernel", project.doxyfile(), project.swig_dir())
            .unwrap_err();

        assert!(matches!(err, DocstringError::Conversion { ref input, .. }
            if input.ends_with("classKernel.xml")));
        assert!(fragments.is_dir());
        assert!(!output_file(&project.swig_dir(), "kernel").exists());
    }
}
