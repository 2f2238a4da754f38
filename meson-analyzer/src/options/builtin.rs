use super::{MesonOption, OptionKind};

#[derive(Clone, Copy)]
enum Kind {
    String,
    Integer,
    Boolean,
    Feature,
    Combo(&'static [&'static str]),
    Array(&'static [&'static str]),
}

struct BuiltinOption {
    name: &'static str,
    kind: Kind,
    description: &'static str,
}

const fn string(name: &'static str, description: &'static str) -> BuiltinOption {
    BuiltinOption {
        name,
        kind: Kind::String,
        description,
    }
}

const fn integer(name: &'static str, description: &'static str) -> BuiltinOption {
    BuiltinOption {
        name,
        kind: Kind::Integer,
        description,
    }
}

const fn boolean(name: &'static str, description: &'static str) -> BuiltinOption {
    BuiltinOption {
        name,
        kind: Kind::Boolean,
        description,
    }
}

const fn feature(name: &'static str, description: &'static str) -> BuiltinOption {
    BuiltinOption {
        name,
        kind: Kind::Feature,
        description,
    }
}

const fn combo(
    name: &'static str,
    values: &'static [&'static str],
    description: &'static str,
) -> BuiltinOption {
    BuiltinOption {
        name,
        kind: Kind::Combo(values),
        description,
    }
}

const fn array(
    name: &'static str,
    choices: &'static [&'static str],
    description: &'static str,
) -> BuiltinOption {
    BuiltinOption {
        name,
        kind: Kind::Array(choices),
        description,
    }
}

static BUILTIN_OPTIONS: &[BuiltinOption] = &[
    combo(
        "wrap_mode",
        &["default", "nofallback", "nodownload", "forcefallback", "nopromote"],
        "Wrap mode to use (Default: `default`)",
    ),
    combo(
        "b_vscrt",
        &["none", "md", "mdd", "mt", "mtd", "from_buildtype", "static_from_buildtype"],
        "VS runtime library to use (Default: `from_buildtype`)",
    ),
    combo("layout", &["mirror", "flat"], "Build directory layout (Default: `mirror`)"),
    boolean("b_lto", "Use link time optimization (Default: `false`)"),
    string("infodir", "Info page directory (Default: `share/info`)"),
    string("libdir", "Library directory"),
    string("sbindir", "System executable directory (Default: `sbin`)"),
    integer(
        "cpp_thread_count",
        "Number of threads to use with emcc when using threads (Default: `4`)",
    ),
    string("cuda_ccbindir", "CUDA non-default toolchain directory to use"),
    boolean("vsenv", "Activate Visual Studio environment (Default: `false`)"),
    array(
        "pkg_config_path",
        &[],
        "Additional paths for pkg-config to search before builtin paths (Default: Empty string)",
    ),
    string("mandir", "Manual page directory (Default: `share/man`)"),
    string("localstatedir", "Localstate data directory (Default: `var`)"),
    array("cpp_link_args", &[], "C++ link arguments to use"),
    string("c_winlibs", "Standard Windows libs to link against"),
    combo(
        "c_std",
        &["none", "c89", "c99", "c11", "c17", "c18", "c2x", "gnu89", "gnu99", "gnu11", "gnu17", "gnu18", "gnu2x", "gnu23"],
        "C language standard to use",
    ),
    combo("b_lto_mode", &[], "Select between lto modes (Default: `default`)"),
    combo(
        "backend",
        &["ninja", "vs", "vs2010", "vs2012", "vs2013", "vs2015", "vs2017", "v2022", "xcode", "none"],
        "Backend to use (Default: `ninja`)",
    ),
    feature("auto_features", "Override value of all `auto` features (Default: `auto`)"),
    boolean("b_pie", "Build position independent executables (Default: `false`)"),
    boolean("b_coverage", "Enable coverage tracking (Default: `false`)"),
    boolean(
        "prefer_static",
        "Whether to try static linking before shared linking (Default: `false`)",
    ),
    combo(
        "buildtype",
        &["plain", "debug", "debugoptimized", "release", "minsize", "custom"],
        "Build type to use (Default: `debug`)",
    ),
    boolean("werror", "Treat warnings as errors (Default: `false`)"),
    combo(
        "warning_level",
        &["0", "1", "2", "3", "everything"],
        "Set the warning level. From 0 = none to everything = highest (Default: `1`)",
    ),
    string("python.platlibdir", "Directory for site-specific, platform-specific files"),
    string("prefix", "Installation prefix (`C:\\` or `/usr/local` by default)"),
    string("bindir", "Executable directory (Default: `bin`)"),
    integer(
        "c_thread_count",
        "Number of threads to use with emcc when using threads (Default: `4`)",
    ),
    array(
        "cmake_prefix_path",
        &[],
        "Additional prefixes for cmake to search before builtin paths (Default: Empty array)",
    ),
    array("c_link_args", &[], "C link arguments to use"),
    combo(
        "fortran_std",
        &["none", "legacy", "f95", "f2003", "f2008", "f2018"],
        "Fortran language standard to use",
    ),
    string("python.purelibdir", "Directory for site-specific, non-platform-specific files"),
    integer("b_lto_threads", "Use multiple threads for lto (Default: `0`)"),
    string("sysconfdir", "Sysconf data directory (Default: `etc`)"),
    boolean("stdsplit", "Split stdout and stderr in test logs (Default: `true`)"),
    boolean("errorlogs", "Whether to print the logs from failing tests (Default: `true`)"),
    combo(
        "optimization",
        &["plain", "0", "g", "1", "2", "3", "s"],
        "Optimization level (Default: `0`)",
    ),
    boolean("b_pch", "Use precompiled headers (Default: `true`)"),
    string("localedir", "Locale data directory (Default: `share/locale`)"),
    boolean(
        "b_thinlto_cache",
        "Enable LLVM's ThinLTO cache for faster incremental builds (Default: `false`)",
    ),
    array(
        "force_fallback_for",
        &[],
        "Force fallback for those dependencies (Default: Empty array)",
    ),
    combo("unity", &["on", "off", "subprojects"], "Unity build (Default: `off`)"),
    combo("b_colorout", &[], "Use colored output (Default: `always`)"),
    array("cpp_args", &[], "C++ compile arguments to use"),
    combo(
        "b_pgo",
        &["off", "generate", "use"],
        "Use profile guided optimization (Default: `off`)",
    ),
    combo(
        "python.install_env",
        &["auto", "prefix", "system", "venv"],
        "Which python environment to install to (Default: `prefix`)",
    ),
    boolean("b_staticpic", "Build static libraries as position independent (Default: `true`)"),
    boolean("strip", "Strip targets on install (Default: `false`"),
    combo(
        "cpp_std",
        &["none", "c++98", "c++03", "c++11", "c++14", "c++17", "c++20", "c++2a", "c++1z", "gnu++03", "gnu++11", "gnu++14", "gnu++17", "gnu++1z", "gnu++2a", "gnu++20", "gnu++23", "c++26", "gnu++26", "vc++14", "vc++17", "vc++latest"],
        "C++ language standard to use",
    ),
    combo(
        "b_ndebug",
        &["true", "false", "if-release"],
        "Disabler asserts (Default: `false`)",
    ),
    boolean("b_asneeded", "Use -Wl,--as-needed when linking (Default: `true`)"),
    array("c_args", &[], "C compile arguments to use"),
    string("b_thinlto_cache_dir", "Specify where to store ThinLTO cache objects"),
    string("datadir", "Data file directory (Default: `share`)"),
    string("includedir", "Header file directory (Default: `include`)"),
    boolean("cpp_debugstl", "C++ STL debug mode (Default: `false`)"),
    boolean("cpp_rtti", "Whether to enable RTTI (Runtime type identification"),
    boolean("b_lundef", "Don't allow undefined symbols when linking (Default: `true`)"),
    boolean("debug", "Enable debug symbols and other information (Default: `true`)"),
    array("cuda_args", &[], "Cuda compile arguments to use"),
    string("licensedir", "Licenses directory (Empty by default)"),
    combo(
        "cpp_eh",
        &["none", "default", "a", "s", "sc"],
        "C++ exception handling type (Default: `default`)",
    ),
    combo(
        "default_library",
        &["shared", "static", "both"],
        "Default library type (Default: `shared`)",
    ),
    combo(
        "default_both_libraries",
        &["shared", "static", "both"],
        "Default library type for both_libraries (Default: `shared`)",
    ),
    integer(
        "install_umask",
        "Default umask to apply on permissions of installed files. (Default: `022`)",
    ),
    combo(
        "b_sanitize",
        &["none", "address", "thread", "undefined", "memory", "leak", "address,undefined"],
        "Code sanitizer to use",
    ),
    array("objc_args", &[], "Objective-C compile arguments to use"),
    integer("unity_size", "Unity file block size (Default: `4`)"),
    boolean(
        "pkgconfig.relocatable",
        "Generate the pkgconfig files as relocatable (Default: `false`)",
    ),
    string("libexecdir", "Library executable directory (Default: `libexec`)"),
    string("sharedstatedir", "Architecture-independent data directory (Default: `com`)"),
    boolean("b_bitcode", "Embed Apple bitcode (Default: `false`)"),
    string("cpp_winlibs", "Standard Windows libs to link against"),
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn builtin_options() -> Vec<MesonOption> {
    BUILTIN_OPTIONS
        .iter()
        .map(|option| MesonOption {
            name: option.name.to_string(),
            description: Some(option.description.to_string()),
            deprecated: false,
            kind: match option.kind {
                Kind::String => OptionKind::String,
                Kind::Integer => OptionKind::Integer,
                Kind::Boolean => OptionKind::Boolean,
                Kind::Feature => OptionKind::Feature,
                Kind::Combo(values) => OptionKind::Combo {
                    values: owned(values),
                },
                Kind::Array(choices) => OptionKind::Array {
                    choices: owned(choices),
                },
            },
        })
        .collect()
}
