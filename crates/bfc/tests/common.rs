#![allow(missing_docs, dead_code)]

/// Prints `Hello World!` followed by a newline.
pub const HELLO_WORLD: &str = "\
++++++++ [ set cell 0 to 8
  >++++ [ add 4 to cell 1 then fan out
    >++ >+++ >+++ >+ <<<<-
  ]
  >+ >+ >- >>+ [<] <-
]
>>.  H
>---.  e
+++++++..+++.  llo
>>.  space
<-.<.  W o
+++.------.--------.  rld
>>+.  !
>++.  newline
";

/// Copies standard input to standard output until end of file.
pub const CAT: &str = ",[.,]";

/// Adds cell 0 to cell 1 and prints the result.
pub const ADD: &str = "++>+++++[<+>-]<.";
