use super::{kw, method, opt, pos, req, varargs, varargs_opt, MethodSpec, MethodTable};

const BOOL_METHODS: &[MethodSpec] = &[
    method("to_int", &[], &[], "int"),
    method("to_string", &[], &[], "str"),
];

const BUILD_MACHINE_METHODS: &[MethodSpec] = &[
    method("cpu", &[], &[], "str"),
    method("cpu_family", &[], &[], "str"),
    method("endian", &[], &[], "str"),
    method("system", &[], &[], "str"),
];

const BOTH_LIBS_METHODS: &[MethodSpec] = &[
    method("get_shared_lib", &[], &[], "lib"),
    method("get_static_lib", &[], &[], "lib"),
];

const BUILD_TGT_METHODS: &[MethodSpec] = &[
    method("extract_all_objects", &[], &[kw("recursive", "bool")], "extracted_obj"),
    method("extract_objects", &[varargs_opt("source", "str|file")], &[], "extracted_obj"),
    method("found", &[], &[], "bool"),
    method("full_path", &[], &[], "str"),
    method("name", &[], &[], "str"),
    method("path", &[], &[], "str"),
    method("private_dir_include", &[], &[], "inc"),
];

const COMPILER_METHODS: &[MethodSpec] = &[
    method(
        "alignment",
        &[pos("typename", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("prefix", "list(str)|str"),
        ],
        "int",
    ),
    method(
        "check_header",
        &[pos("header_name", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
            kw("required", "bool|feature"),
        ],
        "bool",
    ),
    method("cmd_array", &[], &[], "list(str)"),
    method(
        "compiles",
        &[pos("code", "str|file")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("name", "str"),
            kw("no_builtin_args", "bool"),
        ],
        "bool",
    ),
    method(
        "compute_int",
        &[pos("expr", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("guess", "int"),
            kw("high", "int"),
            kw("include_directories", "list(inc)|inc"),
            kw("low", "int"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "int",
    ),
    method(
        "find_library",
        &[pos("libname", "str")],
        &[
            kw("dirs", "list(str)"),
            kw("disabler", "bool"),
            kw("header_args", "list(str)"),
            kw("header_dependencies", "list(dep)|dep"),
            kw("header_include_directories", "list(inc)|inc"),
            kw("header_no_builtin_args", "bool"),
            kw("header_prefix", "str"),
            kw("required", "bool|feature"),
            kw("static", "str"),
        ],
        "dep",
    ),
    method("first_supported_argument", &[varargs_opt("arg", "str")], &[], "list(str)"),
    method("first_supported_link_argument", &[varargs_opt("arg", "str")], &[], "list(str)"),
    method("get_argument_syntax", &[], &[], "str"),
    method(
        "get_define",
        &[pos("definename", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "str",
    ),
    method("get_id", &[], &[], "str"),
    method("get_linker_id", &[], &[], "str"),
    method(
        "get_supported_arguments",
        &[varargs_opt("arg", "str")],
        &[kw("checked", "str")],
        "list(str)",
    ),
    method("get_supported_function_attributes", &[varargs_opt("attribs", "str")], &[], "list(str)"),
    method("get_supported_link_arguments", &[varargs_opt("arg", "str")], &[], "list(str)"),
    method("has_argument", &[pos("argument", "str")], &[], "bool"),
    method(
        "has_function",
        &[pos("funcname", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "bool",
    ),
    method("has_function_attribute", &[pos("name", "str")], &[], "bool"),
    method(
        "has_header",
        &[pos("header_name", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
            kw("required", "bool|feature"),
        ],
        "bool",
    ),
    method(
        "has_header_symbol",
        &[pos("header", "str"), pos("symbol", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
            kw("required", "bool|feature"),
        ],
        "bool",
    ),
    method("has_link_argument", &[pos("argument", "str")], &[], "bool"),
    method(
        "has_member",
        &[pos("typename", "str"), pos("membername", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "bool",
    ),
    method(
        "has_members",
        &[pos("typename", "str"), varargs("member", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "bool",
    ),
    method("has_multi_arguments", &[varargs_opt("arg", "str")], &[], "bool"),
    method("has_multi_link_arguments", &[varargs_opt("arg", "str")], &[], "bool"),
    method(
        "has_type",
        &[pos("typename", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "bool",
    ),
    method(
        "links",
        &[pos("source", "str|file")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("name", "str"),
            kw("no_builtin_args", "bool"),
        ],
        "bool",
    ),
    method(
        "preprocess",
        &[varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list")],
        &[
            kw("compile_args", "list(str)"),
            kw("include_directories", "list(inc)|inc"),
            kw("output", "str"),
        ],
        "list(custom_idx)",
    ),
    method(
        "run",
        &[pos("code", "str|file")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("name", "str"),
            kw("no_builtin_args", "bool"),
        ],
        "runresult",
    ),
    method(
        "sizeof",
        &[pos("typename", "str")],
        &[
            kw("args", "list(str)"),
            kw("dependencies", "list(dep)|dep"),
            kw("include_directories", "list(inc)|inc"),
            kw("name", "str"),
            kw("no_builtin_args", "bool"),
            kw("prefix", "list(str)|str"),
        ],
        "int",
    ),
    method("symbols_have_underscore_prefix", &[], &[], "bool"),
    method("version", &[], &[], "str"),
];

const CUSTOM_IDX_METHODS: &[MethodSpec] = &[
    method("full_path", &[], &[], "str"),
];

const CUSTOM_TGT_METHODS: &[MethodSpec] = &[
    method("index", &[pos("index", "int")], &[], "custom_idx"),
    method("full_path", &[], &[], "str"),
    method("to_list", &[], &[], "list(custom_idx)"),
];

const DEP_METHODS: &[MethodSpec] = &[
    method("as_link_whole", &[], &[], "dep"),
    method("as_system", &[opt("value", "str")], &[], "dep"),
    method("found", &[], &[], "bool"),
    method("get_configtool_variable", &[pos("var_name", "str")], &[], "str"),
    method(
        "get_pkgconfig_variable",
        &[pos("var_name", "str")],
        &[kw("default", "str"), kw("define_variable", "list(str)")],
        "str",
    ),
    method(
        "get_variable",
        &[opt("varname", "str")],
        &[
            kw("cmake", "str"),
            kw("configtool", "str"),
            kw("default_value", "str"),
            kw("internal", "str"),
            kw("pkgconfig", "str"),
            kw("pkgconfig_define", "list(str)"),
        ],
        "str",
    ),
    method("include_type", &[], &[], "str"),
    method("name", &[], &[], "str"),
    method(
        "partial_dependency",
        &[],
        &[
            kw("compile_args", "bool"),
            kw("includes", "bool"),
            kw("link_args", "bool"),
            kw("links", "bool"),
            kw("sources", "bool"),
        ],
        "dep",
    ),
    method("type_name", &[], &[], "str"),
    method("version", &[], &[], "str"),
];

const ENV_METHODS: &[MethodSpec] = &[
    method(
        "append",
        &[pos("variable", "str"), varargs_opt("value", "str")],
        &[kw("separator", "str")],
        "void",
    ),
    method(
        "prepend",
        &[pos("variable", "str"), varargs_opt("value", "str")],
        &[kw("separator", "str")],
        "void",
    ),
    method(
        "set",
        &[pos("variable", "str"), varargs_opt("value", "str")],
        &[kw("separator", "str")],
        "void",
    ),
];

const EXTERNAL_PROGRAM_METHODS: &[MethodSpec] = &[
    method("found", &[], &[], "bool"),
    method("full_path", &[], &[], "str"),
    method("path", &[], &[], "str"),
    method("version", &[], &[], "str"),
];

const FEATURE_METHODS: &[MethodSpec] = &[
    method("allowed", &[], &[], "bool"),
    method("auto", &[], &[], "bool"),
    method("disable_auto_if", &[pos("value", "bool")], &[], "feature"),
    method("disabled", &[], &[], "bool"),
    method("enabled", &[], &[], "bool"),
    method("require", &[pos("value", "bool")], &[kw("error_message", "str")], "feature"),
    method("disable_if", &[pos("value", "bool")], &[kw("error_message", "str")], "feature"),
    method("enable_if", &[pos("value", "bool")], &[kw("error_message", "str")], "feature"),
    method("enable_auto_if", &[pos("value", "bool")], &[], "feature"),
];

const GENERATOR_METHODS: &[MethodSpec] = &[
    method(
        "process",
        &[varargs("source", "str|file|custom_tgt|custom_idx|generated_list")],
        &[
            kw("env", "env|list(str)|dict(str)"),
            kw("extra_args", "list(str)"),
            kw("preserve_path_from", "str"),
        ],
        "generated_list",
    ),
];

const MODULE_METHODS: &[MethodSpec] = &[
    method("found", &[], &[], "bool"),
];

const RUNRESULT_METHODS: &[MethodSpec] = &[
    method("compiled", &[], &[], "bool"),
    method("returncode", &[], &[], "int"),
    method("stderr", &[], &[], "str"),
    method("stdout", &[], &[], "str"),
];

const SUBPROJECT_METHODS: &[MethodSpec] = &[
    method("found", &[], &[], "bool"),
    method("get_variable", &[pos("var_name", "str"), opt("fallback", "any")], &[], "any"),
];

const DICT_METHODS: &[MethodSpec] = &[
    method("get", &[pos("key", "str"), opt("fallback", "any")], &[], "any"),
    method("has_key", &[pos("key", "str")], &[], "bool"),
    method("keys", &[], &[], "list(str)"),
];

const INT_METHODS: &[MethodSpec] = &[
    method("is_even", &[], &[], "bool"),
    method("is_odd", &[], &[], "bool"),
    method("to_string", &[], &[], "str"),
];

const MESON_METHODS: &[MethodSpec] = &[
    method(
        "add_devenv",
        &[pos("env", "env|str|list(str)|dict(str)|dict(list(str))")],
        &[kw("method", "str"), kw("separator", "str")],
        "void",
    ),
    method(
        "add_dist_script",
        &[
            pos("script_name", "str|file|external_program"),
            varargs_opt("arg", "str|file|external_program"),
        ],
        &[],
        "void",
    ),
    method(
        "add_install_script",
        &[
            pos("script_name", "str|file|external_program|exe|custom_tgt|custom_idx"),
            varargs_opt("arg", "str|file|external_program|exe|custom_tgt|custom_idx"),
        ],
        &[kw("install_tag", "str"), kw("skip_if_destdir", "bool")],
        "void",
    ),
    method(
        "add_postconf_script",
        &[
            pos("script_name", "str|file|external_program"),
            varargs_opt("arg", "str|file|external_program"),
        ],
        &[],
        "void",
    ),
    method("backend", &[], &[], "str"),
    method("build_root", &[], &[], "str"),
    method("can_run_host_binaries", &[], &[], "bool"),
    method("current_build_dir", &[], &[], "str"),
    method("current_source_dir", &[], &[], "str"),
    method("get_compiler", &[pos("language", "str")], &[kw("native", "bool")], "compiler"),
    method(
        "get_cross_property",
        &[pos("propname", "str"), opt("fallback_value", "any")],
        &[],
        "any",
    ),
    method(
        "get_external_property",
        &[pos("propname", "str"), opt("fallback_value", "any")],
        &[],
        "any",
    ),
    method("global_build_root", &[], &[], "str"),
    method("global_source_root", &[], &[], "str"),
    method("has_exe_wrapper", &[], &[], "bool"),
    method("has_external_property", &[pos("propname", "str")], &[kw("native", "bool")], "bool"),
    method("install_dependency_manifest", &[pos("output_name", "str")], &[], "void"),
    method("is_cross_build", &[], &[], "bool"),
    method("is_subproject", &[], &[], "bool"),
    method("is_unity", &[], &[], "bool"),
    method(
        "override_dependency",
        &[pos("name", "str"), pos("dep_object", "dep")],
        &[kw("native", "bool"), kw("static", "bool")],
        "void",
    ),
    method(
        "override_find_program",
        &[pos("progname", "str"), pos("program", "exe|file|external_program")],
        &[],
        "void",
    ),
    method("project_build_root", &[], &[], "str"),
    method("project_license", &[], &[], "list(str)"),
    method("project_license_files", &[], &[], "any"),
    method("project_name", &[], &[], "str"),
    method("project_source_root", &[], &[], "str"),
    method("project_version", &[], &[], "str"),
    method("source_root", &[], &[], "str"),
    method("version", &[], &[], "str"),
    method("build_options", &[], &[], "str"),
];

const CMAKE_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "subproject",
        &[pos("subproject_name", "str")],
        &[
            kw("options", "cmake_subprojectoptions"),
            kw("required", "bool|feature"),
            kw("cmake_options", "list(str)"),
        ],
        "cmake_subproject",
    ),
    method("subproject_options", &[], &[], "cmake_subprojectoptions"),
    method(
        "write_basic_package_version_file",
        &[],
        &[
            req("name", "str"),
            req("version", "str"),
            kw("compatibility", "str"),
            kw("arch_independent", "bool"),
            kw("install_dir", "str"),
        ],
        "void",
    ),
    method(
        "configure_package_config_file",
        &[],
        &[
            req("name", "str"),
            req("input", "str|file"),
            req("configuration", "cfg_data"),
            kw("install_dir", "str"),
        ],
        "void",
    ),
];

const CMAKE_SUBPROJECT_METHODS: &[MethodSpec] = &[
    method("dependency", &[pos("tgt", "cmake_target")], &[kw("include_type", "str")], "dep"),
    method("include_directories", &[pos("tgt", "cmake_target")], &[], "inc"),
    method("target", &[pos("tgt", "cmake_target")], &[], "tgt"),
    method("target_type", &[pos("tgt", "cmake_target")], &[], "str"),
    method("target_list", &[], &[], "list(str)"),
    method("found", &[], &[], "bool"),
    method("get_variable", &[pos("var_name", "str"), opt("fallback", "any")], &[], "any"),
];

const CMAKE_SUBPROJECTOPTIONS_METHODS: &[MethodSpec] = &[
    method("add_cmake_defines", &[pos("defines", "dict(str)")], &[], "void"),
    method(
        "set_override_option",
        &[pos("opt", "str"), pos("val", "str")],
        &[kw("target", "cmake_target")],
        "void",
    ),
    method("set_install", &[pos("install", "bool")], &[kw("target", "cmake_target")], "void"),
    method(
        "append_compile_args",
        &[pos("language", "str"), varargs("arg", "str")],
        &[kw("target", "cmake_target")],
        "void",
    ),
    method(
        "append_link_args",
        &[pos("language", "str"), varargs("arg", "str")],
        &[kw("target", "cmake_target")],
        "void",
    ),
    method("clear", &[], &[], "void"),
];

const CUDA_MODULE_METHODS: &[MethodSpec] = &[
    method("min_driver_version", &[pos("version_string", "str")], &[], "str"),
    method(
        "nvcc_arch_flags",
        &[opt("architecture_set", "str")],
        &[kw("detected", "str|list(str)")],
        "list(str)",
    ),
    method(
        "nvcc_arch_readable",
        &[opt("architecture_set", "str")],
        &[kw("detected", "str|list(str)")],
        "list(str)",
    ),
];

const DLANG_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "generate_dub_file",
        &[pos("name", "str"), pos("source", "str")],
        &[
            kw("authors", "str|list(str)"),
            kw("description", "str"),
            kw("copyright", "str|list(str)"),
            kw("license", "str|list(str)"),
            kw("sourceFiles", "str|list(str)"),
            kw("targetType", "str"),
            kw("dependencies", "list(dep|str)"),
        ],
        "void",
    ),
];

const EXTERNAL_PROJECT_METHODS: &[MethodSpec] = &[
    method("dependency", &[pos("subdir", "str")], &[kw("subdir", "str")], "dep"),
];

const EXTERNAL_PROJECT_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "add_project",
        &[pos("script", "str")],
        &[
            kw("configure_options", "list(str)"),
            kw("cross_configure_options", "list(str)"),
            kw("verbose", "bool"),
            kw("env", "env|list(str)|dict(str)"),
            kw("depends", "list(build_tgt|custom_tgt)"),
        ],
        "external_project",
    ),
];

const FS_MODULE_METHODS: &[MethodSpec] = &[
    method("exists", &[pos("file", "str")], &[], "bool"),
    method("is_dir", &[pos("file", "str")], &[], "bool"),
    method("is_file", &[pos("file", "str")], &[], "bool"),
    method("is_symlink", &[pos("file", "str|file")], &[], "bool"),
    method("is_absolute", &[pos("file", "str")], &[], "bool"),
    method("hash", &[pos("file", "str|file"), pos("hash_algorithm", "str")], &[], "str"),
    method("size", &[pos("file", "str|file")], &[], "int"),
    method("is_samepath", &[pos("path1", "str|file"), pos("path2", "str|file")], &[], "str"),
    method("expand_user", &[pos("file", "str")], &[], "str"),
    method("as_posix", &[pos("file", "str")], &[], "str"),
    method("replace_suffix", &[pos("file", "str"), pos("suffix", "str")], &[], "str"),
    method("parent", &[pos("file", "file|str")], &[], "str"),
    method("name", &[pos("file", "file|str")], &[], "str"),
    method("stem", &[pos("file", "file|str")], &[], "str"),
    method("read", &[pos("file", "file|str")], &[kw("encoding", "str")], "str"),
    method(
        "copyfile",
        &[pos("src", "file|str"), opt("dst", "str")],
        &[
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("install_tag", "str"),
            kw("install_mode", "list(str|int)"),
        ],
        "custom_tgt",
    ),
];

const GNOME_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "compile_resources",
        &[pos("id", "str"), pos("input", "list(str|file|custom_tgt|custom_idx|generated_list)")],
        &[
            kw("c_name", "str"),
            kw("dependencies", "list(file|custom_tgt|custom_idx)"),
            kw("export", "bool"),
            kw("extra_args", "list(str)"),
            kw("gresource_bundle", "bool"),
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("install_header", "bool"),
            kw("source_dir", "list(str)"),
        ],
        "list(build_tgt)",
    ),
    method(
        "generate_gir",
        &[varargs("file", "exe|lib")],
        &[
            kw("dependencies", "list(dep)"),
            kw("extra_args", "list(str)"),
            kw("export_packages", "list(str)"),
            kw("sources", "list(str|file|custom_tgt|custom_idx)"),
            kw("nsversion", "str"),
            kw("namespace", "str"),
            kw("identifier_prefix", "list(str)"),
            kw("includes", "list(str|custom_tgt)"),
            kw("header", "list(str)"),
            kw("symbol_prefix", "str"),
            kw("include_directories", "list(str|inc)"),
            kw("install", "bool"),
            kw("install_gir", "bool"),
            kw("install_dir_gir", "str|bool"),
            kw("install_typelib", "bool"),
            kw("install_dir_typelib", "str|bool"),
            kw("link_with", "list(lib)"),
            kw("symbok_prefix", "list(str)"),
            kw("fatal_warnings", "bool"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "genmarshal",
        &[pos("basename", "str")],
        &[
            kw("depends", "list(build_tgt|custom_tgt)"),
            kw("depend_files", "str|file"),
            kw("extra_args", "list(str)"),
            kw("install_dir", "str"),
            kw("install_header", "bool"),
            kw("internal", "bool"),
            kw("nostdinc", "bool"),
            req("prefix", "list(str)"),
            kw("skip_source", "bool"),
            req("sources", "list(str|file)"),
            kw("stdinc", "bool"),
            kw("valist_marshallers", "bool"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "mkenums",
        &[pos("name", "str")],
        &[
            kw("install_dir", "str"),
            kw("install_header", "bool"),
            req("sources", "list(str|file|custom_tgt|custom_idx|generated_list)"),
            kw("symbol_prefix", "str"),
            kw("identifier_prefix", "str"),
            kw("depends", "list(build_tgt|custom_tgt)"),
            kw("c_template", "file|str"),
            kw("h_template", "file|str"),
            kw("comments", "str"),
            kw("eprod", "str"),
            kw("fhead", "str"),
            kw("fprod", "str"),
            kw("ftail", "str"),
            kw("vhead", "str"),
            kw("vprod", "str"),
            kw("vtail", "str"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "mkenums_simple",
        &[pos("name", "str")],
        &[
            kw("install_dir", "str"),
            kw("install_header", "bool"),
            req("sources", "list(str|file|custom_tgt|custom_idx|generated_list)"),
            kw("symbol_prefix", "str"),
            kw("identifier_prefix", "str"),
            kw("body_prefix", "str"),
            kw("decorator", "str"),
            kw("function_prefix", "str"),
            kw("header_prefix", "str"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "compile_schemas",
        &[],
        &[kw("build_by_default", "bool"), kw("depend_files", "str|file")],
        "custom_tgt",
    ),
    method(
        "gdbus_codegen",
        &[pos("name", "str"), varargs_opt("file", "str|file|custom_tgt|custom_idx|generated_list")],
        &[
            kw("extra_args", "list(str)"),
            kw("interface_prefix", "str"),
            kw("namespace", "str"),
            kw("object_manager", "bool"),
            kw("annotations", "list(list(str))"),
            kw("install_header", "bool"),
            kw("docbook", "str"),
            kw("autocleanup", "str"),
            kw("install_dir", "str"),
            kw("sources", "str|file|custom_tgt|custom_idx|generated_list"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "generate_vapi",
        &[pos("name", "str")],
        &[
            kw("install_dir", "str"),
            kw("install", "bool"),
            req("sources", "list(str|custom_tgt)"),
            kw("vapi_dirs", "list(str)"),
            kw("metadata_dirs", "list(str)"),
            kw("gir_dirs", "list(str)"),
            kw("packages", "list(str|dep)"),
        ],
        "dep",
    ),
    method(
        "yelp",
        &[pos("name", "str"), varargs_opt("file", "str")],
        &[
            kw("languages", "list(str)"),
            kw("media", "list(str)"),
            kw("sources", "list(str)"),
            kw("symlink_media", "bool"),
        ],
        "void",
    ),
    method(
        "gtkdoc",
        &[pos("name", "str")],
        &[
            kw("c_args", "list(str)"),
            kw("check", "bool"),
            kw("content_files", "list(str|file|generated_list|custom_tgt|custom_idx)"),
            kw("dependencies", "list(dep|lib)"),
            kw("expand_content_files", "list(str|file)"),
            kw("fixref_args", "list(str)"),
            kw("gobject_typesfile", "list(str|file)"),
            kw("html_args", "list(str)"),
            kw("html_assets", "list(str|file)"),
            kw("ignore_headers", "list(str)"),
            kw("include_directories", "list(str|inc)"),
            kw("install_dir", "str"),
            kw("install", "bool"),
            kw("main_sgml", "str"),
            kw("main_xml", "str"),
            kw("fixxref_args", "list(str)"),
            kw("mkdb_args", "list(str)"),
            kw("mode", "str"),
            kw("module_version", "str"),
            kw("namespace", "str"),
            kw("scan_args", "list(str)"),
            kw("scanobj_args", "list(str)"),
            kw("src_dir", "list(str|inc)"),
        ],
        "list(custom_tgt)",
    ),
    method("gtkdoc_html_dir", &[pos("name", "str")], &[], "str"),
    method(
        "post_install",
        &[],
        &[
            kw("glib_compile_schemas", "bool"),
            kw("gtk_update_icon_cache", "bool"),
            kw("update_desktop_database", "bool"),
            kw("update_mime_database", "bool"),
            kw("gio_querymodules", "list(str)"),
        ],
        "void",
    ),
];

const HOTDOC_MODULE_METHODS: &[MethodSpec] = &[
    method("has_extensions", &[varargs("extensions", "str")], &[], "bool"),
    method(
        "generate_doc",
        &[pos("project_name", "str")],
        &[
            req("sitemap", "str|file|custom_tgt|custom_idx"),
            req("index", "str|file|custom_tgt|custom_idx"),
            req("project_version", "str"),
            kw("html_extra_theme", "any"),
            kw("include_paths", "list(str)"),
            kw("dependencies", "list(str|lib|custom_tgt|custom_idx)"),
            kw("depends", "list(custom_tgt|custom_idx)"),
            kw("gi_c_source_roots", "list(str)"),
            kw("extra_assets", "list(str)"),
            kw("extra_extension_paths", "list(str)"),
            kw("subprojects", "list(hotdoc_target)"),
            kw("install", "bool"),
        ],
        "hotdoc_target",
    ),
];

const HOTDOC_TARGET_METHODS: &[MethodSpec] = &[
    method("config_path", &[], &[], "str"),
];

const I18N_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "gettext",
        &[pos("packagename", "str")],
        &[
            kw("args", "list(str)"),
            kw("data_dirs", "list(str)"),
            kw("preset", "str"),
            kw("install", "bool"),
            kw("install_dir", "str"),
        ],
        "list(list(custom_tgt)|run_tgt)",
    ),
    method(
        "merge_file",
        &[],
        &[
            req("output", "str"),
            kw("args", "list(str)"),
            kw("data_dirs", "list(str)"),
            req("po_dir", "str"),
            kw("type", "str"),
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("install_tag", "str"),
            kw("input", "list(str|file|external_program|build_tgt|custom_tgt|custom_idx|extracted_obj|generated_list)"),
        ],
        "custom_tgt",
    ),
    method(
        "itstool_join",
        &[],
        &[
            req("output", "str"),
            kw("args", "list(str)"),
            kw("data_dirs", "list(str)"),
            req("mo_targets", "list(custom_tgt)"),
            kw("its_files", "list(str)"),
            kw("type", "str"),
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("install_tag", "str"),
            kw("input", "list(str|file|external_program|build_tgt|custom_tgt|custom_idx|extracted_obj|generated_list)"),
        ],
        "custom_tgt",
    ),
];

const ICESTORM_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "project",
        &[
            pos("project_name", "str"),
            pos("files", "str|file|custom_tgt|custom_idx|generated_list"),
        ],
        &[req("constraint_file", "str|file|custom_tgt|custom_idx|generated_list")],
        "list(run_tgt|custom_tgt)",
    ),
];

const JAVA_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "generate_native_header",
        &[varargs_opt("files", "str|file|tgt|custom_idx|generated_list")],
        &[kw("package", "str")],
        "custom_tgt",
    ),
    method(
        "generate_native_headers",
        &[varargs_opt("files", "str|file|tgt|custom_idx|generated_list")],
        &[kw("classes", "list(str)"), kw("package", "str")],
        "custom_tgt",
    ),
    method(
        "native_headers",
        &[varargs_opt("files", "str|file|tgt|custom_idx|generated_list")],
        &[kw("classes", "list(str)"), kw("package", "str")],
        "custom_tgt",
    ),
];

const KEYVAL_MODULE_METHODS: &[MethodSpec] = &[
    method("load", &[pos("file", "file|str")], &[], "dict(str)"),
];

const PKGCONFIG_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "generate",
        &[opt("libs", "lib")],
        &[
            kw("d_module_versions", "list(str|int)"),
            kw("install_dir", "list(str)"),
            kw("conflicts", "list(str)"),
            kw("dataonly", "bool"),
            kw("description", "str"),
            kw("extra_cflags", "list(str)"),
            kw("filebase", "str"),
            kw("subdirs", "list(str)"),
            kw("name", "str"),
            kw("url", "str"),
            kw("version", "str"),
            kw("variables", "list(str)|dict(str)"),
            kw("unescaped_variables", "list(str)|dict(str)"),
            kw("uninstalled_variables", "list(str)|dict(str)"),
            kw("unescaped_uninstalled_variables", "list(str)|dict(str)"),
            kw("libraries", "list(str|dep|lib|custom_tgt|custom_idx)"),
            kw("libraries_private", "list(str|dep|lib|custom_tgt|custom_idx)"),
            kw("requires", "list(str|dep|lib)"),
            kw("requires_private", "list(str|dep|lib)"),
        ],
        "external_program",
    ),
];

const PYTHON_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "find_installation",
        &[opt("name_or_path", "str")],
        &[
            kw("required", "bool"),
            kw("disabler", "bool"),
            kw("modules", "list(str)"),
            kw("pure", "bool"),
        ],
        "python_installation",
    ),
];

const PYTHON3_MODULE_METHODS: &[MethodSpec] = &[
    method("find_python", &[], &[], "external_program"),
    method(
        "extension_module",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list"),
        ],
        &[
            kw("c_args", "list(str)"),
            kw("cpp_args", "list(str)"),
            kw("cs_args", "list(str)"),
            kw("d_args", "list(str)"),
            kw("fortran_args", "list(str)"),
            kw("java_args", "list(str)"),
            kw("objc_args", "list(str)"),
            kw("objcpp_args", "list(str)"),
            kw("rust_args", "list(str)"),
            kw("vala_args", "list(str)"),
            kw("cython_args", "list(str)"),
            kw("nasm_args", "list(str)"),
            kw("masm_args", "list(str)"),
            kw("c_pch", "str"),
            kw("cpp_pch", "str"),
            kw("build_by_default", "bool"),
            kw("build_rpath", "str"),
            kw("d_debug", "list(str)"),
            kw("d_import_dirs", "list(str)"),
            kw("d_module_versions", "list(str|int)"),
            kw("d_unittest", "bool"),
            kw("dependencies", "list(dep)"),
            kw("extra_files", "str|file|custom_tgt|custom_idx"),
            kw("gnu_symbol_visibility", "str"),
            kw("gui_app", "bool"),
            kw("implicit_include_directories", "bool"),
            kw("include_directories", "list(str|inc)"),
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("install_mode", "list(str|int)"),
            kw("install_rpath", "str"),
            kw("install_tag", "str"),
            kw("link_args", "list(str)"),
            kw("link_depends", "str|file|custom_tgt|custom_idx"),
            kw("link_language", "str"),
            kw("link_whole", "list(lib|custom_tgt|custom_idx)"),
            kw("link_with", "list(lib|custom_tgt|custom_idx)"),
            kw("name_prefix", "str|list()"),
            kw("name_suffix", "str|list()"),
            kw("native", "bool"),
            kw("objects", "list(extracted_obj|file|str)"),
            kw("override_options", "list(str)"),
            kw("rust_crate_type", "str"),
            kw("sources", "str|file|custom_tgt|custom_idx|generated_list|structured_src"),
            kw("vs_module_defs", "str|file|custom_tgt|custom_idx"),
            kw("win_subsystem", "str"),
        ],
        "build_tgt",
    ),
    method("language_version", &[], &[], "str"),
    method("sysconfig_path", &[], &[], "str"),
];

const QT_METHODS: &[MethodSpec] = &[
    method(
        "compile_resources",
        &[],
        &[
            kw("name", "str"),
            req("sources", "str|file|custom_tgt|custom_idx|generated_list"),
            kw("extra_args", "list(str)"),
            kw("method", "str"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "compile_ui",
        &[],
        &[
            req("sources", "str|file|custom_tgt|custom_idx|generated_list"),
            kw("extra_args", "list(str)"),
            kw("method", "str"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "compile_moc",
        &[],
        &[
            kw("sources", "str|file|custom_tgt|custom_idx|generated_list"),
            kw("headers", "str|file|custom_tgt|custom_idx|generated_list"),
            kw("extra_args", "list(str)"),
            kw("method", "str"),
            kw("dependencies", "list(dep|lib)"),
            kw("include_directories", "list(inc|str)"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "preprocess",
        &[],
        &[
            kw("sources", "list(str|file)"),
            kw("qresources", "list(str|file)"),
            kw("ui_files", "list(str|file|custom_tgt)"),
            kw("moc_sources", "list(str|file|custom_tgt)"),
            kw("moc_headers", "list(str|file|custom_tgt)"),
            kw("moc_extra_args", "list(str)"),
            kw("rcc_extra_args", "list(str)"),
            kw("uic_extra_args", "list(str)"),
            kw("method", "str"),
            kw("dependencies", "list(dep|lib)"),
            kw("include_directories", "list(inc|str)"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "compile_translations",
        &[],
        &[
            kw("build_by_default", "bool"),
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("ts_files", "str|file|custom_tgt|custom_idx|generated_list"),
            kw("rcc_extra_arguments", "list(str)"),
            kw("method", "str"),
            kw("qresource", "str"),
        ],
        "list(custom_tgt)",
    ),
    method("has_tools", &[], &[kw("required", "bool"), kw("method", "str")], "bool"),
];

const RUST_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "test",
        &[pos("name", "str"), pos("tgt", "build_tgt")],
        &[
            kw("args", "list(str|file|tgt)"),
            kw("depends", "list(build_tgt|custom_tgt)"),
            kw("env", "str|list(str)|dict(str)"),
            kw("is_parallel", "bool"),
            kw("priority", "int"),
            kw("should_fail", "bool"),
            kw("suite", "str|list(str)"),
            kw("timeout", "int"),
            kw("verbose", "bool"),
            kw("workdir", "str"),
        ],
        "void",
    ),
    method(
        "bindgen",
        &[],
        &[
            kw("c_args", "list(str)"),
            kw("args", "list(str)"),
            kw("input", "list(file|generated_list|build_tgt|extracted_obj|custom_idx|custom_tgt|str)"),
            kw("include_directories", "list(str|inc)"),
            req("output", "str"),
            kw("dependencies", "list(build_tgt|custom_tgt)"),
        ],
        "custom_tgt",
    ),
];

const SIMD_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "check",
        &[pos("name", "str")],
        &[
            kw("compiler", "compiler"),
            kw("mmx", "str|file|list(str|file)"),
            kw("sse", "str|file|list(str|file)"),
            kw("sse2", "str|file|list(str|file)"),
            kw("sse3", "str|file|list(str|file)"),
            kw("ssse3", "str|file|list(str|file)"),
            kw("sse41", "str|file|list(str|file)"),
            kw("sse42", "str|file|list(str|file)"),
            kw("avx", "str|file|list(str|file)"),
            kw("avx2", "str|file|list(str|file)"),
            kw("neon", "str|file|list(str|file)"),
        ],
        "list(cfg_data|lib)",
    ),
];

const SOURCEFILES_METHODS: &[MethodSpec] = &[
    method("sources", &[], &[], "list(str|file)"),
    method("dependencies", &[], &[], "list(str|file)"),
];

const SOURCESET_METHODS: &[MethodSpec] = &[
    method(
        "add",
        &[varargs_opt("sources", "str|file|generated_list|custom_tgt|custom_idx")],
        &[
            kw("when", "list(dep)"),
            kw("if_true", "list(str|file|generated_list|custom_tgt|custom_idx|dep)"),
            kw("if_false", "list(str|file|generated_list|custom_tgt|custom_idx|dep)"),
        ],
        "void",
    ),
    method(
        "add_all",
        &[varargs_opt("sources", "sourceset")],
        &[kw("when", "list(dep)"), kw("if_true", "list(sourceset)")],
        "void",
    ),
    method("all_sources", &[], &[], "list(str|file)"),
    method("all_dependencies", &[], &[], "list(str|file)"),
    method("apply", &[pos("cfg", "cfg_data|dict(str)")], &[kw("strict", "bool")], "sourcefiles"),
];

const SOURCESET_MODULE_METHODS: &[MethodSpec] = &[
    method("source_set", &[], &[], "sourceset"),
];

const WAYLAND_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "scan_xml",
        &[varargs("files", "str|file")],
        &[
            kw("public", "bool"),
            kw("client", "bool"),
            kw("server", "bool"),
            kw("include_core_only", "bool"),
        ],
        "list(custom_tgt)",
    ),
    method(
        "find_protocol",
        &[pos("files", "str")],
        &[kw("state", "str"), kw("version", "int")],
        "file",
    ),
];

const WINDOWS_MODULE_METHODS: &[MethodSpec] = &[
    method(
        "compile_resources",
        &[varargs("libs", "str|file|custom_tgt|custom_idx")],
        &[
            kw("depends", "list(build_tgt|custom_tgt)"),
            kw("depend_files", "list(str|file)"),
            kw("include_directories", "list(str|inc)"),
            kw("args", "str|list(str)"),
        ],
        "external_program",
    ),
];

const STR_METHODS: &[MethodSpec] = &[
    method("contains", &[pos("fragment", "str")], &[], "bool"),
    method("endswith", &[pos("fragment", "str")], &[], "bool"),
    method("format", &[varargs_opt("value", "int|bool|str")], &[], "str"),
    method("join", &[varargs_opt("strings", "str")], &[], "str"),
    method("replace", &[pos("old", "str"), pos("new", "str")], &[], "str"),
    method("split", &[opt("split_string", "str")], &[], "list(str)"),
    method("startswith", &[pos("fragment", "str")], &[], "bool"),
    method("strip", &[opt("strip_chars", "str")], &[], "str"),
    method("substring", &[opt("start", "int"), opt("end", "int")], &[], "str"),
    method("to_int", &[], &[], "int"),
    method("to_lower", &[], &[], "str"),
    method("to_upper", &[], &[], "str"),
    method("underscorify", &[], &[], "str"),
    method("version_compare", &[pos("compare_string", "str")], &[], "bool"),
];

const CFG_DATA_METHODS: &[MethodSpec] = &[
    method("get", &[pos("var_name", "str"), opt("default_value", "any")], &[], "any"),
    method("get_unquoted", &[pos("var_name", "str"), opt("default_value", "any")], &[], "any"),
    method("has", &[pos("var_name", "str")], &[], "bool"),
    method("keys", &[], &[], "list(str)"),
    method("merge_from", &[pos("other", "cfg_data")], &[], "void"),
    method(
        "set",
        &[pos("var_name", "str"), pos("value", "str|int|bool")],
        &[kw("description", "str")],
        "void",
    ),
    method(
        "set10",
        &[pos("var_name", "str"), pos("value", "bool|int")],
        &[kw("description", "str")],
        "void",
    ),
    method(
        "set_quoted",
        &[pos("var_name", "str"), pos("value", "str")],
        &[kw("description", "str")],
        "void",
    ),
];

const LIST_METHODS: &[MethodSpec] = &[
    method("contains", &[pos("item", "any")], &[], "bool"),
    method("get", &[pos("index", "int"), opt("fallback", "any")], &[], "any"),
    method("length", &[], &[], "int"),
];

const DISABLER_METHODS: &[MethodSpec] = &[
    method("found", &[], &[], "bool"),
];

const PYTHON_INSTALLATION_METHODS: &[MethodSpec] = &[
    method(
        "dependency",
        &[],
        &[
            kw("disabler", "bool"),
            kw("embed", "bool"),
            kw("required", "bool|feature"),
            kw("method", "str"),
        ],
        "dep",
    ),
    method(
        "extension_module",
        &[
            pos("target_name", "str"),
            varargs_opt("source", "str|file|custom_tgt|custom_idx|generated_list"),
        ],
        &[
            kw("dependencies", "list(dep)"),
            kw("include_directories", "list(str|inc)"),
            kw("install", "bool"),
            kw("install_dir", "str"),
            kw("c_args", "list(str)"),
            kw("cpp_args", "list(str)"),
            kw("link_args", "list(str)"),
            kw("link_with", "list(lib|custom_tgt|custom_idx)"),
            kw("override_options", "list(str)"),
            kw("subdir", "str"),
            kw("limited_api", "str"),
        ],
        "build_tgt",
    ),
    method("get_install_dir", &[], &[kw("pure", "bool"), kw("subdir", "str")], "str"),
    method("get_path", &[pos("path_name", "str"), opt("fallback", "any")], &[], "str"),
    method("get_variable", &[pos("variable_name", "str"), opt("fallback", "any")], &[], "str"),
    method("has_path", &[pos("path_name", "str")], &[], "bool"),
    method("has_variable", &[pos("variable_name", "str")], &[], "bool"),
    method(
        "install_sources",
        &[varargs("file", "str|file")],
        &[
            kw("pure", "bool"),
            kw("subdir", "str"),
            kw("install_tag", "str"),
            kw("preserve_path", "bool"),
        ],
        "void",
    ),
    method("language_version", &[], &[], "str"),
];

pub(super) static METHOD_TABLES: &[MethodTable] = &[
    MethodTable { receiver: "bool", methods: BOOL_METHODS },
    MethodTable { receiver: "build_machine", methods: BUILD_MACHINE_METHODS },
    MethodTable { receiver: "both_libs", methods: BOTH_LIBS_METHODS },
    MethodTable { receiver: "build_tgt", methods: BUILD_TGT_METHODS },
    MethodTable { receiver: "compiler", methods: COMPILER_METHODS },
    MethodTable { receiver: "custom_idx", methods: CUSTOM_IDX_METHODS },
    MethodTable { receiver: "custom_tgt", methods: CUSTOM_TGT_METHODS },
    MethodTable { receiver: "dep", methods: DEP_METHODS },
    MethodTable { receiver: "env", methods: ENV_METHODS },
    MethodTable { receiver: "external_program", methods: EXTERNAL_PROGRAM_METHODS },
    MethodTable { receiver: "feature", methods: FEATURE_METHODS },
    MethodTable { receiver: "generator", methods: GENERATOR_METHODS },
    MethodTable { receiver: "module", methods: MODULE_METHODS },
    MethodTable { receiver: "runresult", methods: RUNRESULT_METHODS },
    MethodTable { receiver: "subproject", methods: SUBPROJECT_METHODS },
    MethodTable { receiver: "dict", methods: DICT_METHODS },
    MethodTable { receiver: "int", methods: INT_METHODS },
    MethodTable { receiver: "meson", methods: MESON_METHODS },
    MethodTable { receiver: "cmake_module", methods: CMAKE_MODULE_METHODS },
    MethodTable { receiver: "cmake_subproject", methods: CMAKE_SUBPROJECT_METHODS },
    MethodTable { receiver: "cmake_subprojectoptions", methods: CMAKE_SUBPROJECTOPTIONS_METHODS },
    MethodTable { receiver: "cuda_module", methods: CUDA_MODULE_METHODS },
    MethodTable { receiver: "dlang_module", methods: DLANG_MODULE_METHODS },
    MethodTable { receiver: "external_project", methods: EXTERNAL_PROJECT_METHODS },
    MethodTable { receiver: "external_project_module", methods: EXTERNAL_PROJECT_MODULE_METHODS },
    MethodTable { receiver: "fs_module", methods: FS_MODULE_METHODS },
    MethodTable { receiver: "gnome_module", methods: GNOME_MODULE_METHODS },
    MethodTable { receiver: "hotdoc_module", methods: HOTDOC_MODULE_METHODS },
    MethodTable { receiver: "hotdoc_target", methods: HOTDOC_TARGET_METHODS },
    MethodTable { receiver: "i18n_module", methods: I18N_MODULE_METHODS },
    MethodTable { receiver: "icestorm_module", methods: ICESTORM_MODULE_METHODS },
    MethodTable { receiver: "java_module", methods: JAVA_MODULE_METHODS },
    MethodTable { receiver: "keyval_module", methods: KEYVAL_MODULE_METHODS },
    MethodTable { receiver: "pkgconfig_module", methods: PKGCONFIG_MODULE_METHODS },
    MethodTable { receiver: "python_module", methods: PYTHON_MODULE_METHODS },
    MethodTable { receiver: "python3_module", methods: PYTHON3_MODULE_METHODS },
    MethodTable { receiver: "qt4_module", methods: QT_METHODS },
    MethodTable { receiver: "rust_module", methods: RUST_MODULE_METHODS },
    MethodTable { receiver: "simd_module", methods: SIMD_MODULE_METHODS },
    MethodTable { receiver: "sourcefiles", methods: SOURCEFILES_METHODS },
    MethodTable { receiver: "sourceset", methods: SOURCESET_METHODS },
    MethodTable { receiver: "sourceset_module", methods: SOURCESET_MODULE_METHODS },
    MethodTable { receiver: "wayland_module", methods: WAYLAND_MODULE_METHODS },
    MethodTable { receiver: "windows_module", methods: WINDOWS_MODULE_METHODS },
    MethodTable { receiver: "str", methods: STR_METHODS },
    MethodTable { receiver: "cfg_data", methods: CFG_DATA_METHODS },
    MethodTable { receiver: "list", methods: LIST_METHODS },
    MethodTable { receiver: "disabler", methods: DISABLER_METHODS },
    MethodTable { receiver: "python_installation", methods: PYTHON_INSTALLATION_METHODS },
    MethodTable { receiver: "qt5_module", methods: QT_METHODS },
    MethodTable { receiver: "qt6_module", methods: QT_METHODS },
];
