#![expect(missing_docs)]

mod common;

use bfc::{EofBehavior, Indent, TranslatorOptions, translate_str};

use crate::common::{ADD, CAT};

fn spaced(eof: EofBehavior) -> TranslatorOptions {
    TranslatorOptions {
        indent: Indent::spaces(4),
        eof,
        ..Default::default()
    }
}

#[test]
fn snapshot_add_program() {
    insta::assert_snapshot!(translate_str(ADD, spaced(EofBehavior::Unchanged)).unwrap(), @r"
    #include <stdio.h>
    int
    main(void)
    {
        static unsigned char buffer[30000];
        int p = 0;
        buffer[p]++;
        buffer[p]++;
        p++;
        buffer[p]++;
        buffer[p]++;
        buffer[p]++;
        buffer[p]++;
        buffer[p]++;
        while (buffer[p]) {
            p--;
            buffer[p]++;
            p++;
            buffer[p]--;
        }
        p--;
        putchar(buffer[p]);
        return 0;
    }
    ");
}

#[test]
fn snapshot_cat_program() {
    insta::assert_snapshot!(translate_str(CAT, spaced(EofBehavior::Zero)).unwrap(), @r"
    #include <stdio.h>
    int
    main(void)
    {
        static unsigned char buffer[30000];
        int p = 0;
        { int c = getchar(); buffer[p] = c == EOF ? 0 : (unsigned char)c; }
        while (buffer[p]) {
            putchar(buffer[p]);
            { int c = getchar(); buffer[p] = c == EOF ? 0 : (unsigned char)c; }
        }
        return 0;
    }
    ");
}

#[test]
fn snapshot_comment_only_program() {
    insta::assert_snapshot!(translate_str("hello world", spaced(EofBehavior::Unchanged)).unwrap(), @r"
    #include <stdio.h>
    int
    main(void)
    {
        static unsigned char buffer[30000];
        int p = 0;
        return 0;
    }
    ");
}
