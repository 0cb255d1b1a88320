//! Built-in fixed catalogues for the scenario templates. These carry no
//! numeric synthesis: a template picks one entry uniformly and copies it.

/// A code snippet with its canonical answer.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
  pub code: &'static str,
  pub answer: &'static str,
  pub alternatives: &'static [&'static str],
  pub explanation: &'static str,
}

/// Named algorithm with its asymptotic bound.
#[derive(Clone, Copy, Debug)]
pub struct ComplexityFact {
  pub name: &'static str,
  pub complexity: &'static str,
  pub alternatives: &'static [&'static str],
}

/// Sample arrays and pointer names for the pointer arithmetic template.
pub const ARRAY_NAMES: [&str; 8] = ["arr", "nums", "values", "data", "list", "sequence", "buffer", "elements"];
pub const POINTER_NAMES: [&str; 6] = ["p", "ptr", "q", "pointer", "it", "ref"];

/// Variables used in the multiply-by-shifts puzzle.
pub const SHIFT_VARIABLES: [&str; 5] = ["x", "n", "val", "num", "k"];

/// Member names, assigned in declaration order.
pub const MEMBER_NAMES: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

pub const TIME_COMPLEXITIES: [ComplexityFact; 5] = [
  ComplexityFact { name: "Binary Search", complexity: "O(log n)", alternatives: &["O(lg n)"] },
  ComplexityFact { name: "Linear Search", complexity: "O(n)", alternatives: &[] },
  ComplexityFact { name: "Bubble Sort", complexity: "O(n²)", alternatives: &["O(n^2)", "O(n*n)"] },
  ComplexityFact { name: "Merge Sort", complexity: "O(n log n)", alternatives: &["O(n lg n)"] },
  ComplexityFact { name: "Quick Sort", complexity: "O(n log n)", alternatives: &["O(n lg n)"] },
];

pub const SPACE_COMPLEXITIES: [ComplexityFact; 4] = [
  ComplexityFact { name: "Recursive Fibonacci", complexity: "O(n)", alternatives: &[] },
  ComplexityFact { name: "Iterative Fibonacci", complexity: "O(1)", alternatives: &[] },
  ComplexityFact { name: "Merge Sort", complexity: "O(n)", alternatives: &[] },
  ComplexityFact { name: "Quick Sort", complexity: "O(log n)", alternatives: &["O(lg n)"] },
];

pub const MEMORY_BUGS: [Scenario; 2] = [
  Scenario {
    code: "void function() {\n    int* ptr = (int*)malloc(sizeof(int));\n    // Missing free(ptr)\n}",
    answer: "Memory leak",
    alternatives: &["leak"],
    explanation: "The allocated memory is never freed, causing a memory leak",
  },
  Scenario {
    code: "void function() {\n    int* ptr = (int*)malloc(sizeof(int));\n    free(ptr);\n    free(ptr);  // Double free\n}",
    answer: "Double free",
    alternatives: &["double-free"],
    explanation: "The same memory is freed twice, which is undefined behavior",
  },
];

pub const GETOPT_LOOPS: [Scenario; 2] = [
  Scenario {
    code: "int opt;\nwhile ((opt = getopt(argc, argv, \"ab:\")) != -1) {\n    switch (opt) {\n        case 'a':\n            printf(\"A\\n\");\n            break;\n        case 'b':\n            printf(\"B: %s\\n\", optarg);\n            break;\n        default:\n            printf(\"?\\n\");\n    }\n}\nprintf(\"%d\\n\", optind);",
    answer: "index of first non-option argument",
    alternatives: &["first non-option argument index"],
    explanation: "optind is set to the index of the first non-option argument after getopt finishes parsing.",
  },
  Scenario {
    code: "int opt;\nwhile ((opt = getopt(argc, argv, \"f:\")) != -1) {\n    switch (opt) {\n        case 'f':\n            printf(\"File: %s\\n\", optarg);\n            break;\n        default:\n            printf(\"?\\n\");\n    }\n}\nprintf(\"%s\\n\", optarg);",
    answer: "last option argument",
    alternatives: &["argument of the last option"],
    explanation: "optarg points to the argument of the last option processed.",
  },
];

pub const STAT_FIELDS: [Scenario; 3] = [
  Scenario {
    code: "struct stat st;\nstat(\"file.txt\", &st);\nprintf(\"%ld\\n\", st.st_size);",
    answer: "file size in bytes",
    alternatives: &["file size", "size in bytes"],
    explanation: "st_size gives the size of the file in bytes.",
  },
  Scenario {
    code: "struct stat st;\nstat(\"file.txt\", &st);\nprintf(\"%o\\n\", st.st_mode);",
    answer: "file mode (permissions)",
    alternatives: &["file mode", "permissions"],
    explanation: "st_mode encodes the file type and permissions.",
  },
  Scenario {
    code: "struct stat st;\nstat(\"file.txt\", &st);\nprintf(\"%ld\\n\", st.st_mtime);",
    answer: "last modification time",
    alternatives: &["modification time"],
    explanation: "st_mtime is the last modification time of the file.",
  },
];

pub const VALGRIND_SCENARIOS: [Scenario; 5] = [
  Scenario {
    code: "int *p = malloc(sizeof(int));\n*p = 5;\nprintf(\"%d\\n\", *p);\nfree(p);",
    answer: "No error",
    alternatives: &["none"],
    explanation: "Memory is allocated, used, and freed correctly.",
  },
  Scenario {
    code: "int *p = malloc(sizeof(int));\nprintf(\"%d\\n\", *p);\nfree(p);",
    answer: "Conditional jump or move depends on uninitialized value(s)",
    alternatives: &["uninitialized value", "uninitialised value"],
    explanation: "*p is used before being initialized.",
  },
  Scenario {
    code: "int *p = malloc(sizeof(int));\nfree(p);\n*p = 10;",
    answer: "Invalid write of size 4",
    alternatives: &["invalid write"],
    explanation: "Writing to memory after it has been freed.",
  },
  Scenario {
    code: "int *p = malloc(sizeof(int));\nfree(p);\nfree(p);",
    answer: "Invalid free() / delete / delete[] / realloc()",
    alternatives: &["invalid free()", "invalid free"],
    explanation: "Double free of the same pointer.",
  },
  Scenario {
    code: "int arr[5];\nprintf(\"%d\\n\", arr[5]);",
    answer: "Invalid read of size 4",
    alternatives: &["invalid read"],
    explanation: "Reading out of bounds of the array.",
  },
];

/// Member layouts for the padding walkthrough. Answers are computed, not stored.
pub const PADDING_LAYOUTS: [&[&str]; 6] = [
  &["long", "char", "int", "short"],
  &["char", "int"],
  &["int", "char"],
  &["char", "double", "char"],
  &["double", "char", "char"],
  &["char", "short", "char", "int"],
];
