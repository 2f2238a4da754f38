use crate::ast::{Ast, NodeId, NodeKind};
use crate::namespace::Callee;

use super::TypeAnalyzer;

const COMPILER_IDS: &[&str] = &[
    "arm", "armclang", "ccomp", "ccrx", "clang", "clang-cl", "dmd", "emscripten", "flang", "g95",
    "gcc", "intel", "intel-cl", "icc", "intel-llvm", "intel-llvm-cl", "lcc", "llvm", "mono",
    "msvc", "nagfor", "nvidia_hpc", "open64", "pathscale", "pgi", "rustc", "sun", "c2000", "ti",
    "valac", "xc16", "cython", "nasm", "yasm", "ml", "armasm", "mwasmarm", "mwasmeppc",
];

const ARGUMENT_SYNTAXES: &[&str] = &["gcc", "msvc", "gnu", ""];

const LINKER_IDS: &[&str] = &[
    "ld.bfd", "ld.gold", "ld.lld", "ld.mold", "ld.solaris", "ld.wasm", "ld64", "ld64.lld", "link",
    "lld-link", "xilink", "optlink", "rlink", "xc16-ar", "ar2000", "ti-ar", "armlink", "pgi",
    "nvlink", "ccomp", "mwldarm", "mwldeppc",
];

const CPU_FAMILIES: &[&str] = &[
    "aarch64", "alpha", "arc", "arm", "avr", "c2000", "csky", "dspic", "e2k", "ft32", "ia64",
    "loongarch64", "m68k", "microblaze", "mips", "mips32", "mips64", "msp430", "parisc", "pic24",
    "ppc", "ppc64", "riscv32", "riscv64", "rl78", "rx", "s390", "s390x", "sh4", "sparc",
    "sparc64", "wasm32", "wasm64", "x86", "x86_64",
];

const OS_NAMES: &[&str] = &[
    "android", "cygwin", "darwin", "dragonfly", "emscripten", "freebsd", "gnu", "haiku", "linux",
    "netbsd", "openbsd", "windows", "sunos",
];

/// Functions whose only observable effect is their return value.
const PURE_FUNCTIONS: &[&str] = &[
    "disabler",
    "environment",
    "files",
    "generator",
    "get_variable",
    "import",
    "include_directories",
    "is_disabler",
    "is_variable",
    "join_paths",
    "structured_sources",
];

/// Same as [`PURE_FUNCTIONS`], keyed by `receiver.method`.
const PURE_METHODS: &[&str] = &[
    "build_machine.cpu",
    "build_machine.cpu_family",
    "build_machine.endian",
    "build_machine.system",
    "meson.backend",
    "meson.build_options",
    "meson.build_root",
    "meson.can_run_host_binaries",
    "meson.current_build_dir",
    "meson.current_source_dir",
    "meson.get_cross_property",
    "meson.get_external_property",
    "meson.global_build_root",
    "meson.global_source_root",
    "meson.has_exe_wrapper",
    "meson.has_external_property",
    "meson.is_cross_build",
    "meson.is_subproject",
    "meson.is_unity",
    "meson.project_build_root",
    "meson.project_license",
    "meson.project_license_files",
    "meson.project_name",
    "meson.project_source_root",
    "meson.project_version",
    "meson.source_root",
    "meson.version",
    "both_libs.get_shared_lib",
    "both_libs.get_static_lib",
    "build_tgt.extract_all_objects",
    "build_tgt.extract_objects",
    "build_tgt.found",
    "build_tgt.full_path",
    "build_tgt.name",
    "build_tgt.path",
    "build_tgt.private_dir_include",
    "cfg_data.get",
    "cfg_data.get_unquoted",
    "cfg_data.has",
    "cfg_data.keys",
    "custom_idx.full_path",
    "custom_tgt.full_path",
    "custom_tgt.to_list",
    "dep.as_link_whole",
    "dep.as_system",
    "dep.found",
    "dep.get_configtool_variable",
    "dep.get_pkgconfig_variable",
    "dep.get_variable",
    "dep.include_type",
    "dep.name",
    "dep.partial_dependency",
    "dep.type_name",
    "dep.version",
    "disabler.found",
    "external_program.found",
    "external_program.full_path",
    "external_program.path",
    "external_program.version",
    "feature.allowed",
    "feature.auto",
    "feature.disabled",
    "feature.enabled",
    "module.found",
    "runresult.compiled",
    "runresult.returncode",
    "runresult.stderr",
    "runresult.stdout",
    "subproject.found",
    "subproject.get_variable",
    "str.contains",
    "str.endswith",
    "str.format",
    "str.join",
    "str.replace",
    "str.split",
    "str.startswith",
    "str.strip",
    "str.substring",
    "str.to_lower",
    "str.to_upper",
    "str.underscorify",
    "str.version_compare",
    "bool.to_int",
    "bool.to_string",
    "dict.get",
    "dict.has_key",
    "dict.keys",
    "int.even",
    "int.is_odd",
    "int.to_string",
    "list.contains",
    "list.get",
    "list.length",
];

/// `@NAME@` sequences that configure_file() and custom targets substitute,
/// so they are fine in plain string literals.
pub(super) fn is_template_placeholder(name: &str) -> bool {
    if name.starts_with("OUTPUT") || name.starts_with("INPUT") || name.starts_with("OUTDIR") {
        return true;
    }
    matches!(
        name,
        "BASENAME"
            | "BUILD_ROOT"
            | "BUILD_DIR"
            | "PLAINNAME"
            | "EXTRA_ARGS"
            | "CURRENT_SOURCE_DIR"
            | "DEPFILE"
            | "SOURCE_ROOT"
            | "PRIVATE_DIR"
            | "SOURCE_DIR"
            | "VCS_TAG"
    )
}

/// `error()` and `subdir_done()` end evaluation of the current file.
pub(super) fn is_terminator(ast: &Ast, stmt: NodeId) -> bool {
    matches!(ast.function_name(stmt), Some("error" | "subdir_done"))
}

fn is_pure(callee: Callee) -> bool {
    match callee {
        Callee::Function(function) => PURE_FUNCTIONS.contains(&function.name),
        Callee::Method(method) => PURE_METHODS.contains(&method.id().as_str()),
    }
}

impl<'a> TypeAnalyzer<'a> {
    pub(super) fn check_no_effect(&mut self, stmt: NodeId) {
        let no_effect = match self.ast.kind(stmt) {
            NodeKind::IntegerLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::BooleanLiteral { .. }
            | NodeKind::ArrayLiteral { .. }
            | NodeKind::DictionaryLiteral { .. } => true,
            NodeKind::FunctionExpression { .. } | NodeKind::MethodExpression { .. } => {
                self.table.callee(stmt).is_some_and(is_pure)
            }
            _ => false,
        };
        if no_effect {
            self.warning(
                stmt,
                "Statement does not have an effect or the result to the call is unused",
            );
        }
    }

    /// Compares the literal in `method() == 'literal'` against the values
    /// the method can actually return, for the handful of methods whose
    /// results are fixed identifiers.
    pub(super) fn check_special_comparison(&mut self, method: NodeId, literal: NodeId) {
        let options = self.options;
        if options.disable_all_id_linting {
            return;
        }
        let Some(value) = self.ast.string_value(literal) else {
            return;
        };
        let Some(Callee::Method(callee)) = self.table.callee(method) else {
            return;
        };
        let (known, disabled, message): (&[&str], bool, &str) = match callee.id().as_str() {
            "compiler.get_id" => (
                COMPILER_IDS,
                options.disable_compiler_id_linting,
                "Unknown compiler id",
            ),
            "compiler.get_argument_syntax" => (
                ARGUMENT_SYNTAXES,
                options.disable_compiler_argument_id_linting,
                "Unknown compiler argument syntax",
            ),
            "compiler.get_linker_id" => (
                LINKER_IDS,
                options.disable_linker_id_linting,
                "Unknown linker id",
            ),
            "build_machine.cpu_family" => (
                CPU_FAMILIES,
                options.disable_cpu_family_linting,
                "Unknown CPU family",
            ),
            "build_machine.system" => (
                OS_NAMES,
                options.disable_os_family_linting,
                "Unknown OS family",
            ),
            _ => return,
        };
        if !disabled && !known.contains(&value) {
            self.warning(literal, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_cover_prefixed_names() {
        assert!(is_template_placeholder("OUTPUT0"), "indexed outputs are placeholders");
        assert!(is_template_placeholder("INPUT"), "plain input is a placeholder");
        assert!(is_template_placeholder("VCS_TAG"), "vcs tag is a placeholder");
        assert!(!is_template_placeholder("version"), "plain names are not placeholders");
    }

    #[test]
    fn id_tables_include_common_values() {
        assert!(COMPILER_IDS.contains(&"gcc"), "gcc is a compiler id");
        assert!(CPU_FAMILIES.contains(&"x86_64"), "x86_64 is a cpu family");
        assert!(OS_NAMES.contains(&"linux"), "linux is an os name");
        assert!(LINKER_IDS.contains(&"ld.lld"), "lld is a linker id");
    }
}
