//! File templates written by `cppinit <name>`.
//!
//! - `main.cpp` - an empty `main` returning 0
//! - `Makefile` - links `main.o` into a binary named after the project

pub const SOURCE_FILE: &str = "main.cpp";
pub const BUILD_FILE: &str = "Makefile";

pub fn main_source() -> String {
    r#"#include <iostream>

int main() {
    //Code here
    return 0;
}
"#
    .to_string()
}

/// Makefile producing `name`. Recipe lines must start with a tab.
pub fn makefile(name: &str) -> String {
    format!(
        "all: {name}\n\
         \n\
         {name}: main.o\n\
         \tg++ main.o -o {name}\n\
         \n\
         main.o: main.cpp\n\
         \tg++ -c main.cpp\n\
         \n\
         clean:\n\
         \trm -rf *.o {name}\n"
    )
}
