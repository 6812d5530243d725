//! SQL statements used by the routers
//!
//! Each constant is the base of a [`QueryBuilder`](super::QueryBuilder): the
//! select list and joins, without `WHERE` or `ORDER BY`.

// Students

pub const LIST_STUDENTS: &str = r#"
    SELECT student_id, name, department
    FROM Students
"#;

pub const STUDENT_SCHEDULE: &str = r#"
    SELECT c.course_name, cs.day_of_week::text AS day_of_week,
        cs.start_time, cs.end_time, cs.room
    FROM ClassSchedule AS cs
    JOIN Courses AS c ON cs.course_id = c.course_id
    JOIN Enrollments AS e ON c.course_id = e.course_id
"#;

pub const STUDENT_ENROLLMENTS: &str = r#"
    SELECT c.course_name, s.name AS semester_name
    FROM Enrollments AS e
    JOIN Courses AS c ON e.course_id = c.course_id
    JOIN Semesters AS s ON e.semester_id = s.semester_id
"#;

pub const STUDENT_PLACEMENTS: &str = r#"
    SELECT r.company_name, p.status, p.ctc_lpa::float8 AS ctc_lpa
    FROM Placements AS p
    JOIN Recruiters AS r ON p.company_id = r.company_id
"#;

// Professors

pub const LIST_PROFESSORS: &str = r#"
    SELECT professor_id, name, department
    FROM Professors
"#;

pub const PROFESSOR_NAMES: &str = r#"
    SELECT name
    FROM Professors
"#;

pub const PROFESSOR_COURSES: &str = r#"
    SELECT course_id, course_name, credits, department
    FROM Courses
"#;

pub const PROFESSOR_SCHEDULE: &str = r#"
    SELECT c.course_name, cs.day_of_week::text AS day_of_week,
        cs.start_time, cs.end_time, cs.room
    FROM ClassSchedule AS cs
    JOIN Courses AS c ON cs.course_id = c.course_id
"#;

pub const COURSE_ROSTER: &str = r#"
    SELECT s.student_id, s.name, s.department
    FROM Students AS s
    JOIN Enrollments AS e ON s.student_id = e.student_id
"#;

// Courses

pub const LIST_COURSES: &str = r#"
    SELECT c.course_id, c.course_name, c.credits, c.department,
        p.name AS professor_name
    FROM Courses AS c
    LEFT JOIN Professors AS p ON c.professor_id = p.professor_id
"#;

pub const COURSE_DETAIL: &str = r#"
    SELECT c.course_id, c.course_name, c.credits, c.department,
        p.professor_id, p.name AS professor_name
    FROM Courses AS c
    LEFT JOIN Professors AS p ON c.professor_id = p.professor_id
"#;

pub const COURSE_SCHEDULE: &str = r#"
    SELECT day_of_week::text AS day_of_week, start_time, end_time, room
    FROM ClassSchedule
"#;

pub const SEARCH_COURSES: &str = r#"
    SELECT course_id, course_name, department
    FROM Courses
"#;

/// Sort key placing Monday..Friday first, in week order, then any other label.
pub const WEEKDAY_RANK: &str = r#"CASE day_of_week::text
        WHEN 'Monday' THEN 1
        WHEN 'Tuesday' THEN 2
        WHEN 'Wednesday' THEN 3
        WHEN 'Thursday' THEN 4
        WHEN 'Friday' THEN 5
        ELSE 6
    END"#;

// Recruiters

pub const LIST_RECRUITERS: &str = r#"
    SELECT company_id, company_name, job_roles::text AS job_roles
    FROM Recruiters
"#;

pub const RECRUITER_PLACEMENTS: &str = r#"
    SELECT p.placement_id, s.student_id, s.name AS student_name, s.department,
        p.status, p.ctc_lpa::float8 AS ctc_lpa
    FROM Placements AS p
    JOIN Students AS s ON p.student_id = s.student_id
"#;
