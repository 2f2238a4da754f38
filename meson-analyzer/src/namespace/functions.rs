use super::{function, kw, opt, pos, req, varargs, varargs_opt, FunctionSpec, Kwarg};

/// Keyword arguments accepted by every build target function.
const BUILD_TARGET_KWARGS: &[Kwarg] = &[
    kw("c_args", "list(str)"),
    kw("cpp_args", "list(str)"),
    kw("cs_args", "list(str)"),
    kw("cuda_args", "list(str)"),
    kw("cython_args", "list(str)"),
    kw("d_args", "list(str)"),
    kw("fortran_args", "list(str)"),
    kw("java_args", "list(str)"),
    kw("masm_args", "list(str)"),
    kw("nasm_args", "list(str)"),
    kw("objc_args", "list(str)"),
    kw("objcpp_args", "list(str)"),
    kw("rust_args", "list(str)"),
    kw("vala_args", "list(str)"),
    kw("c_pch", "str|file"),
    kw("cpp_pch", "str|file"),
    kw("build_by_default", "bool"),
    kw("build_rpath", "str"),
    kw("d_debug", "list(str)"),
    kw("d_import_dirs", "list(str|inc)"),
    kw("d_module_versions", "list(str|int)"),
    kw("d_unittest", "bool"),
    kw("dependencies", "list(dep)"),
    kw("extra_files", "list(str|file|custom_tgt|custom_idx)"),
    kw("gnu_symbol_visibility", "str"),
    kw("gui_app", "bool"),
    kw("implicit_include_directories", "bool"),
    kw("include_directories", "list(str|inc)"),
    kw("install", "bool"),
    kw("install_dir", "list(str|bool)"),
    kw("install_mode", "list(str|int)"),
    kw("install_rpath", "str"),
    kw("install_tag", "str"),
    kw("link_args", "list(str)"),
    kw("link_depends", "list(str|file|custom_tgt|custom_idx)"),
    kw("link_language", "str"),
    kw("link_whole", "list(lib|custom_tgt|custom_idx)"),
    kw("link_with", "list(lib|custom_tgt|custom_idx)"),
    kw("name_prefix", "str|list()"),
    kw("name_suffix", "str|list()"),
    kw("native", "bool"),
    kw("objects", "list(extracted_obj|file|str)"),
    kw("override_options", "list(str)|dict(str|int|bool)"),
    kw("rust_crate_type", "str"),
    kw("rust_dependency_map", "dict(str)"),
    kw("sources", "list(str|file|custom_tgt|custom_idx|generated_list|structured_src)"),
    kw("vala_gir", "str"),
    kw("vala_header", "str"),
    kw("vala_vapi", "str"),
    kw("vs_module_defs", "str|file|custom_tgt|custom_idx"),
    kw("win_subsystem", "str"),
];

const TEST_KWARGS: &[Kwarg] = &[
    kw("args", "list(str|file|tgt|external_program|custom_idx)"),
    kw("depends", "list(build_tgt|custom_tgt)"),
    kw("env", "env|list(str)|dict(str)"),
    kw("priority", "int"),
    kw("protocol", "str"),
    kw("should_fail", "bool"),
    kw("suite", "list(str)|str"),
    kw("timeout", "int"),
    kw("verbose", "bool"),
    kw("workdir", "str"),
];

pub(super) static FUNCTIONS: &[FunctionSpec] = &[
    function(
        "add_global_arguments",
        &[varargs("argument", "str")],
        &[req("language", "list(str)|str"), kw("native", "bool")],
        "void",
    ),
    function(
        "add_global_link_arguments",
        &[varargs("argument", "str")],
        &[req("language", "list(str)|str"), kw("native", "bool")],
        "void",
    ),
    function(
        "add_languages",
        &[varargs_opt("language", "str")],
        &[kw("native", "bool"), kw("required", "bool|feature")],
        "bool",
    ),
    function(
        "add_project_arguments",
        &[varargs("argument", "str")],
        &[req("language", "list(str)|str"), kw("native", "bool")],
        "void",
    ),
    function(
        "add_project_dependencies",
        &[varargs_opt("dependency", "dep")],
        &[req("language", "list(str)|str"), kw("native", "bool")],
        "void",
    ),
    function(
        "add_project_link_arguments",
        &[varargs("argument", "str")],
        &[req("language", "list(str)|str"), kw("native", "bool")],
        "void",
    ),
    function(
        "add_test_setup",
        &[pos("setup_name", "str")],
        &[
            kw("env", "env|list(str)|dict(str)"),
            kw("exclude_suites", "list(str)"),
            kw("exe_wrapper", "list(str|external_program)"),
            kw("gdb", "bool"),
            kw("is_default", "bool"),
            kw("timeout_multiplier", "int"),
        ],
        "void",
    ),
    function(
        "alias_target",
        &[pos("target_name", "str"), varargs("dependency", "tgt")],
        &[],
        "alias_tgt",
    ),
    function("assert", &[pos("condition", "bool"), opt("message", "str")], &[], "void"),
    function(
        "benchmark",
        &[
            pos("name", "str"),
            pos("executable", "exe|jar|external_program|file|custom_tgt|custom_idx"),
        ],
        &[],
        "void",
    )
    .with_shared_kwargs(TEST_KWARGS),
    function(
        "both_libraries",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[],
        "both_libs",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function(
        "build_target",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[
            req("target_type", "str"),
            kw("main_class", "str"),
            kw("java_resources", "structured_src"),
        ],
        "build_tgt",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function("configuration_data", &[opt("data", "dict(str|bool|int)")], &[], "cfg_data"),
    function(
        "configure_file",
        &[],
        &[
            kw("capture", "bool"),
            kw("command", "list(str|file|external_program|exe)"),
            kw("configuration", "cfg_data|dict(str|int|bool)"),
            kw("copy", "bool"),
            kw("depfile", "str"),
            kw("encoding", "str"),
            kw("format", "str"),
            kw("input", "str|file|list(str|file)"),
            kw("install", "bool"),
            kw("install_dir", "str|bool"),
            kw("install_mode", "list(str|int)"),
            kw("install_tag", "str"),
            kw("macro_name", "str"),
            req("output", "str"),
            kw("output_format", "str"),
        ],
        "file",
    ),
    function(
        "custom_target",
        &[opt("name", "str")],
        &[
            kw("build_always", "bool"),
            kw("build_always_stale", "bool"),
            kw("build_by_default", "bool"),
            kw("capture", "bool"),
            kw("command", "list(str|file|external_program|exe|custom_tgt|custom_idx)"),
            kw("console", "bool"),
            kw("depend_files", "list(str|file)"),
            kw("depends", "list(build_tgt|custom_tgt|custom_idx)"),
            kw("depfile", "str"),
            kw("env", "env|list(str)|dict(str)"),
            kw("feed", "bool"),
            kw("input", "list(str|file|custom_tgt|custom_idx|generated_list|extracted_obj|build_tgt)"),
            kw("install", "bool"),
            kw("install_dir", "list(str|bool)"),
            kw("install_mode", "list(str|int)"),
            kw("install_tag", "list(str)"),
            req("output", "list(str)"),
        ],
        "custom_tgt",
    ),
    function("debug", &[pos("message", "any"), varargs_opt("msg", "any")], &[], "void"),
    function(
        "declare_dependency",
        &[],
        &[
            kw("compile_args", "list(str)"),
            kw("d_import_dirs", "list(str|inc)"),
            kw("d_module_versions", "list(str|int)"),
            kw("dependencies", "list(dep)"),
            kw("extra_files", "list(str|file)"),
            kw("include_directories", "list(str|inc)"),
            kw("link_args", "list(str)"),
            kw("link_whole", "list(lib|custom_tgt|custom_idx)"),
            kw("link_with", "list(lib|custom_tgt|custom_idx)"),
            kw("objects", "list(extracted_obj)"),
            kw("sources", "list(str|file|custom_tgt|custom_idx|generated_list)"),
            kw("variables", "dict(str)|list(str)"),
            kw("version", "str"),
        ],
        "dep",
    ),
    function(
        "dependency",
        &[varargs("names", "str")],
        &[
            kw("allow_fallback", "bool"),
            kw("cmake_args", "list(str)"),
            kw("cmake_module_path", "list(str)"),
            kw("cmake_package_version", "str"),
            kw("components", "list(str)"),
            kw("default_options", "list(str)|dict(str|int|bool)"),
            kw("disabler", "bool"),
            kw("embed", "bool"),
            kw("fallback", "list(str)|str"),
            kw("include_type", "str"),
            kw("language", "str"),
            kw("main", "bool"),
            kw("method", "str"),
            kw("modules", "list(str)"),
            kw("native", "bool"),
            kw("not_found_message", "str"),
            kw("optional_modules", "list(str)"),
            kw("private_headers", "bool"),
            kw("required", "bool|feature"),
            kw("static", "bool"),
            kw("version", "list(str)|str"),
        ],
        "dep",
    ),
    function("disabler", &[], &[], "disabler"),
    function(
        "environment",
        &[opt("env", "str|list(str)|dict(str)|dict(list(str))")],
        &[kw("method", "str"), kw("separator", "str")],
        "env",
    ),
    function("error", &[pos("message", "any"), varargs_opt("msg", "any")], &[], "void"),
    function(
        "executable",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[kw("export_dynamic", "bool"), kw("implib", "bool|str"), kw("pie", "bool")],
        "exe",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function("files", &[varargs_opt("file", "str")], &[], "list(file)"),
    function(
        "find_program",
        &[varargs("program_name", "str|file")],
        &[
            kw("dirs", "list(str)"),
            kw("disabler", "bool"),
            kw("native", "bool"),
            kw("required", "bool|feature"),
            kw("version", "list(str)|str"),
        ],
        "external_program",
    ),
    function(
        "generator",
        &[pos("exe", "exe|external_program")],
        &[
            kw("arguments", "list(str)"),
            kw("capture", "bool"),
            kw("depends", "list(build_tgt|custom_tgt)"),
            kw("depfile", "str"),
            req("output", "list(str)"),
        ],
        "generator",
    ),
    function(
        "get_option",
        &[pos("option_name", "str")],
        &[],
        "str|int|bool|feature|list(str|int|bool)",
    ),
    function("get_variable", &[pos("variable_name", "str"), opt("default", "any")], &[], "any"),
    function(
        "import",
        &[pos("module_name", "str")],
        &[kw("disabler", "bool"), kw("required", "bool|feature")],
        "module",
    ),
    function(
        "include_directories",
        &[varargs_opt("includes", "str|inc")],
        &[kw("is_system", "bool")],
        "inc",
    ),
    function(
        "install_data",
        &[varargs_opt("file", "str|file")],
        &[
            kw("follow_symlinks", "bool"),
            kw("install_dir", "str"),
            kw("install_mode", "list(str|int)"),
            kw("install_tag", "str"),
            kw("preserve_path", "bool"),
            kw("rename", "list(str)"),
            kw("sources", "list(file|str)"),
        ],
        "void",
    ),
    function(
        "install_emptydir",
        &[varargs("dirpath", "str")],
        &[kw("install_mode", "list(str|int)"), kw("install_tag", "str")],
        "void",
    ),
    function(
        "install_headers",
        &[varargs_opt("file", "str|file")],
        &[
            kw("follow_symlinks", "bool"),
            kw("install_dir", "str"),
            kw("install_mode", "list(str|int)"),
            kw("preserve_path", "bool"),
            kw("subdir", "str"),
        ],
        "void",
    ),
    function(
        "install_man",
        &[varargs_opt("file", "str|file")],
        &[kw("install_dir", "str"), kw("install_mode", "list(str|int)"), kw("locale", "str")],
        "void",
    ),
    function(
        "install_subdir",
        &[pos("subdir_name", "str")],
        &[
            kw("exclude_directories", "list(str)"),
            kw("exclude_files", "list(str)"),
            kw("follow_symlinks", "bool"),
            req("install_dir", "str"),
            kw("install_mode", "list(str|int)"),
            kw("install_tag", "str"),
            kw("strip_directory", "bool"),
        ],
        "void",
    ),
    function(
        "install_symlink",
        &[pos("link_name", "str")],
        &[req("install_dir", "str"), kw("install_tag", "str"), req("pointing_to", "str")],
        "void",
    ),
    function("is_disabler", &[pos("var", "any")], &[], "bool"),
    function("is_variable", &[pos("var", "str")], &[], "bool"),
    function(
        "jar",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[kw("main_class", "str"), kw("java_resources", "structured_src")],
        "jar",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function("join_paths", &[varargs("part", "str")], &[], "str"),
    function(
        "library",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[
            kw("darwin_versions", "str|int|list(str)"),
            kw("soversion", "str|int"),
            kw("version", "str"),
        ],
        "lib",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function("message", &[pos("text", "any"), varargs_opt("more_text", "any")], &[], "void"),
    function(
        "project",
        &[pos("project_name", "str"), varargs_opt("language", "str")],
        &[
            kw("default_options", "list(str)|dict(str|int|bool)"),
            kw("license", "str|list(str)"),
            kw("license_files", "str|list(str)"),
            kw("meson_version", "str"),
            kw("subproject_dir", "str"),
            kw("version", "str|file"),
        ],
        "void",
    ),
    function("range", &[pos("start", "int"), opt("stop", "int"), opt("step", "int")], &[], "range"),
    function(
        "run_command",
        &[varargs("command", "str|file|external_program")],
        &[kw("capture", "bool"), kw("check", "bool"), kw("env", "env|list(str)|dict(str)")],
        "runresult",
    ),
    function(
        "run_target",
        &[pos("target_name", "str")],
        &[
            kw("command", "list(exe|external_program|custom_tgt|file|str)"),
            kw("depends", "list(build_tgt|custom_tgt)"),
            kw("env", "env|list(str)|dict(str)"),
        ],
        "run_tgt",
    ),
    function("set_variable", &[pos("variable_name", "str"), pos("value", "any")], &[], "void"),
    function(
        "shared_library",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[
            kw("darwin_versions", "str|int|list(str)"),
            kw("soversion", "str|int"),
            kw("version", "str"),
        ],
        "lib",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function(
        "shared_module",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[],
        "build_tgt",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function(
        "static_library",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list|structured_src|extracted_obj|lib"),
        ],
        &[kw("pic", "bool"), kw("prelink", "bool")],
        "lib",
    )
    .with_shared_kwargs(BUILD_TARGET_KWARGS),
    function(
        "structured_sources",
        &[pos("root", "any"), opt("additional", "dict(any)")],
        &[],
        "structured_src",
    ),
    function("subdir", &[pos("dir_name", "str")], &[kw("if_found", "list(dep)")], "void"),
    function("subdir_done", &[], &[], "void"),
    function(
        "subproject",
        &[pos("subproject_name", "str")],
        &[
            kw("default_options", "list(str)|dict(str|int|bool)"),
            kw("required", "bool|feature"),
            kw("version", "str"),
        ],
        "subproject",
    ),
    function(
        "summary",
        &[pos("key_or_dict", "str|dict(any)"), opt("value", "any")],
        &[kw("bool_yn", "bool"), kw("list_sep", "str"), kw("section", "str")],
        "void",
    ),
    function(
        "test",
        &[
            pos("name", "str"),
            pos("executable", "exe|jar|external_program|file|custom_tgt|custom_idx"),
        ],
        &[kw("is_parallel", "bool")],
        "void",
    )
    .with_shared_kwargs(TEST_KWARGS),
    function("unset_variable", &[pos("variable_name", "str")], &[], "void"),
    function(
        "vcs_tag",
        &[],
        &[
            kw("command", "list(str|file|external_program)"),
            kw("fallback", "str"),
            req("input", "str|file"),
            req("output", "str"),
            kw("replace_string", "str"),
        ],
        "custom_tgt",
    ),
    function("warning", &[pos("text", "any"), varargs_opt("more_text", "any")], &[], "void"),
];
