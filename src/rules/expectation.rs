//! Stubbing, argument matcher and verification rewrites.

use super::RuleSet;
use crate::error::Result;
use crate::transform::TransformBuilder;

/// Receiver of a mocked call: `m`, `ac.Locker`, `s.deps.runner`.
const RECV: &str = r"\w+(?:\.\w+)*";

/// Argument text with up to two levels of nested parentheses.
const ARGS: &str = r"(?:[^()]|\((?:[^()]|\([^()]*\))*\))*";

/// Like [`ARGS`], confined to a single line.
const LINE_ARGS: &str = r"(?:[^()\r\n]|\((?:[^()\r\n]|\([^()\r\n]*\))*\))*";

/// An invocation-count matcher such as `Once()` or `Times(2)`.
const INVOCATIONS: &str = r"(?P<invocations>(?:pegomock\.)?\w+\([^()\r\n]*\))";

/// Optional `a, b := ` in front of a verification that captures arguments.
const CAPTURE_LHS: &str = r"(?:[\w, ]+:?=[ \t]*)?";

/// Rewrites pegomock stubbing and verification into gomock expectations.
///
/// Rules, in order:
///
/// 1. `When(m.F(args)).ThenReturn(v)` to `m.EXPECT().F(args).Return(v)`
/// 2. `Any[T]()` and `AnyString()`-style matchers to `gomock.Any()`
/// 3. `Eq(x)` to `gomock.Eq(x)`
/// 4. `m.VerifyWasCalled(Never()).F(args)` to a TODO with `.Times(0)`
/// 5. `m.VerifyWasCalledOnce().F(args)` to a TODO asking for argument capture
/// 6. `m.VerifyWasCalled(Times(n)).F(args)` to a TODO with `.Times(n)`
/// 7. `AtLeast(n)` / `AtMost(n)` verifications to TODOs with `.MinTimes(n)` / `.MaxTimes(n)`
/// 8. `When(m.F(args)).ThenPanic(v)`, `VerifyWasCalledEventually` and
///    `VerifyWasCalledInOrder` to TODOs naming the gomock replacement
///
/// Verifications must span whole lines; the statement is replaced by one
/// comment line at the same indentation. Both LF and CRLF line endings are
/// recognised. Matchers nested inside matchers are rewritten at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectationRules;

impl ExpectationRules {
    fn verification(count: &str, lhs: &str) -> String {
        format!(
            r"(?mR)^(?P<indent>[ \t]*){lhs}(?P<recv>{RECV})\.{count}\.\s*(?P<method>\w+)\((?P<args>{LINE_ARGS})\)(?:\.\s*GetCapturedArguments\(\))?[ \t]*$"
        )
    }

    fn counted(matcher: &str) -> String {
        Self::verification(
            &format!(r"VerifyWasCalled\(\s*(?:pegomock\.)?{matcher}\((?P<count>[\w.]+)\)\s*\)"),
            CAPTURE_LHS,
        )
    }
}

impl RuleSet for ExpectationRules {
    fn name(&self) -> &str {
        "expectations"
    }

    fn description(&self) -> &str {
        "Rewrite When/ThenReturn stubs, matchers and verifications into EXPECT() calls"
    }

    fn transform(&self) -> Result<TransformBuilder> {
        let stub = format!(
            r"(?m)(?P<pre>^|[^\w.])(?:pegomock\.)?When\((?P<recv>{RECV})\.(?P<method>\w+)\((?P<args>{ARGS})\)\)\.\s*ThenReturn\((?P<ret>{ARGS})\)"
        );
        let panic_stub = format!(
            r"(?mR)^(?P<indent>[ \t]*)(?:pegomock\.)?When\((?P<recv>{RECV})\.(?P<method>\w+)\((?P<args>{LINE_ARGS})\)\)\.\s*ThenPanic\((?P<value>{LINE_ARGS})\)[ \t]*$"
        );

        TransformBuilder::new()
            .replace_pattern(&stub, "${pre}${recv}.EXPECT().${method}(${args}).Return(${ret})")?
            .replace_pattern(
                &panic_stub,
                "${indent}// TODO(gomock): panic with ${value} from .Do(): ${recv}.EXPECT().${method}(${args})",
            )?
            .replace_pattern_until_stable(
                r"(?m)(?P<pre>^|[^\w.])(?:pegomock\.)?Any\[(?:[^\[\]\n]|\[[^\[\]\n]*\])+\]\(\)",
                "${pre}gomock.Any()",
            )?
            .replace_pattern_until_stable(
                r"(?m)(?P<pre>^|[^\w.])(?:pegomock\.)?Any(?:String|Bool|Int|Int8|Int16|Int32|Int64|Uint|Uint8|Uint16|Uint32|Uint64|Float32|Float64)\(\)",
                "${pre}gomock.Any()",
            )?
            .replace_pattern_until_stable(
                r"(?m)(?P<pre>^|[^\w.])(?:pegomock\.)?Eq(?:String|Bool|Int|Int32|Int64|Float64)?\(",
                "${pre}gomock.Eq(",
            )?
            .replace_pattern(
                &Self::verification(r"VerifyWasCalled\(\s*(?:pegomock\.)?Never\(\)\s*\)", ""),
                "${indent}// TODO(gomock): ${recv}.EXPECT().${method}(${args}).Times(0)",
            )?
            .replace_pattern(
                &Self::verification(
                    r"(?:VerifyWasCalledOnce\(\)|VerifyWasCalled\(\s*(?:pegomock\.)?Once\(\)\s*\))",
                    CAPTURE_LHS,
                ),
                "${indent}// TODO(gomock): capture arguments with .Do(): ${recv}.EXPECT().${method}(${args}).Times(1)",
            )?
            .replace_pattern(
                &Self::counted("Times"),
                "${indent}// TODO(gomock): ${recv}.EXPECT().${method}(${args}).Times(${count})",
            )?
            .replace_pattern(
                &Self::counted("AtLeast"),
                "${indent}// TODO(gomock): ${recv}.EXPECT().${method}(${args}).MinTimes(${count})",
            )?
            .replace_pattern(
                &Self::counted("AtMost"),
                "${indent}// TODO(gomock): ${recv}.EXPECT().${method}(${args}).MaxTimes(${count})",
            )?
            .replace_pattern(
                &Self::verification(
                    &format!(r"VerifyWasCalledEventually\(\s*{INVOCATIONS}\s*,\s*(?P<timeout>[^()\r\n]+?)\s*\)"),
                    CAPTURE_LHS,
                ),
                "${indent}// TODO(gomock): wait up to ${timeout} for ${invocations}: ${recv}.EXPECT().${method}(${args})",
            )?
            .replace_pattern(
                &Self::verification(
                    &format!(r"VerifyWasCalledInOrder\(\s*{INVOCATIONS}\s*,\s*\w+\s*\)"),
                    CAPTURE_LHS,
                ),
                "${indent}// TODO(gomock): order with gomock.InOrder(), ${invocations}: ${recv}.EXPECT().${method}(${args})",
            )
    }
}
